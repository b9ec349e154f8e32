//! Projectile resolution: movement, target hits and list compaction.

use tracing::debug;

use crate::events::{FrameEvent, HitSource};
use crate::fighter::Fighter;
use crate::geometry::overlaps;
use crate::projectile::Projectile;
use crate::simulation::FrameContext;

use super::Resolver;

/// Advances every projectile in spawn order and applies hits.
///
/// For each projectile: move it; if it is still alive and shares a plane with
/// its target, test its box against the target's hurtbox. A hit goes through
/// [`Fighter::take_hit`] (which applies block scaling) and spends the
/// projectile. Spent projectiles are removed at the end, preserving order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectileResolver;

impl ProjectileResolver {
    /// Creates the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for ProjectileResolver {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn resolve(&self, fighters: &mut [Fighter; 2], ctx: &mut FrameContext<'_>) {
        for projectile in ctx.projectiles.iter_mut() {
            projectile.update(ctx.arena);
            if !projectile.is_alive() {
                continue;
            }

            let owner = projectile.owner();
            let source_x = fighters[owner.index()].position().x;
            let target = &mut fighters[projectile.target().index()];
            if projectile.plane() != target.plane()
                || !overlaps(projectile.bounds(ctx.arena), target.hurtbox(ctx.arena))
            {
                continue;
            }

            let blocked = target.is_guarding();
            let info = projectile.hit_info().with_source(source_x);
            if let Some(outcome) = target.take_hit(&info, blocked, ctx.events) {
                debug!(
                    owner = %owner,
                    damage = outcome.damage,
                    blocked,
                    "projectile hit"
                );
                ctx.events.push(FrameEvent::Hit {
                    attacker: owner,
                    defender: target.slot(),
                    damage: outcome.damage,
                    blocked,
                    source: HitSource::Projectile,
                });
            }
            projectile.expire();
        }

        ctx.projectiles.retain(Projectile::is_alive);
    }
}
