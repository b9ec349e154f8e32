//! Melee resolution: active hitboxes against opposing hurtboxes.

use tracing::debug;

use crate::events::{FrameEvent, HitSource};
use crate::fighter::Fighter;
use crate::geometry::overlaps;
use crate::simulation::FrameContext;

use super::Resolver;

/// Tests player one's hitbox against player two, then the reverse.
///
/// The two directions are independent, so both fighters can land a hit on
/// the same frame. A connecting attack is cleared immediately, which limits
/// every attack instance to one hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeResolver;

impl MeleeResolver {
    /// Creates the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One direction. Returns whether the attack connected.
    fn strike(attacker: &mut Fighter, defender: &mut Fighter, ctx: &mut FrameContext<'_>) -> bool {
        if attacker.plane() != defender.plane() {
            return false;
        }
        let Some(hitbox) = attacker.hitbox(ctx.arena) else {
            return false;
        };
        if !overlaps(hitbox.rect, defender.hurtbox(ctx.arena)) {
            return false;
        }

        let blocked = defender.is_guarding();
        let info = hitbox.to_hit_info(attacker.position().x);
        if let Some(outcome) = defender.take_hit(&info, blocked, ctx.events) {
            debug!(
                attacker = %attacker.slot(),
                defender = %defender.slot(),
                damage = outcome.damage,
                blocked,
                "melee hit"
            );
            ctx.events.push(FrameEvent::Hit {
                attacker: attacker.slot(),
                defender: defender.slot(),
                damage: outcome.damage,
                blocked,
                source: HitSource::Melee,
            });
        }
        attacker.clear_attack();
        true
    }
}

impl Resolver for MeleeResolver {
    fn name(&self) -> &'static str {
        "melee"
    }

    fn resolve(&self, fighters: &mut [Fighter; 2], ctx: &mut FrameContext<'_>) {
        let [p1, p2] = fighters;
        Self::strike(p1, p2, ctx);
        Self::strike(p2, p1, ctx);
    }
}
