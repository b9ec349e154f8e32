//! Hit resolution.
//!
//! Resolvers run after both fighters have updated and turn geometric
//! contact into damage. They own nothing: each call borrows both fighters and
//! the frame context for a single pass.
//!
//! # Invariants
//!
//! - Resolvers only test attackers against defenders on the same plane
//! - A hit is applied through [`Fighter::take_hit`] exactly once, which is
//!   where block scaling happens
//! - Resolvers run in a fixed order: [`MeleeResolver`], then
//!   [`ProjectileResolver`]
//!
//! # Available Resolvers
//!
//! - [`MeleeResolver`]: hitbox against hurtbox, both directions
//! - [`ProjectileResolver`]: moves projectiles, hits their targets, compacts
//!   the list

mod melee;
mod projectile;

pub use melee::MeleeResolver;
pub use projectile::ProjectileResolver;

use crate::fighter::Fighter;
use crate::simulation::FrameContext;

/// One hit-resolution pass over both fighters.
///
/// # Example
///
/// ```
/// use twinplane_core::fighter::Fighter;
/// use twinplane_core::resolver::Resolver;
/// use twinplane_core::simulation::FrameContext;
///
/// struct Referee;
///
/// impl Resolver for Referee {
///     fn name(&self) -> &'static str {
///         "referee"
///     }
///
///     fn resolve(&self, fighters: &mut [Fighter; 2], ctx: &mut FrameContext<'_>) {
///         // Inspect fighters, push events
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Applies this frame's hits.
    ///
    /// `fighters` is indexed by [`PlayerSlot::index`](crate::fighter::PlayerSlot::index).
    fn resolve(&self, fighters: &mut [Fighter; 2], ctx: &mut FrameContext<'_>);
}
