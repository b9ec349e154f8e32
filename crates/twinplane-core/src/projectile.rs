//! Thrown projectiles: straight-line horizontal motion on a fixed plane.
//!
//! A projectile refers to its thrower by [`PlayerSlot`] only. The slot picks
//! the opposing target and the knockback source; the projectile never
//! mutates its owner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::fighter::{Facing, HitInfo, Plane, PlayerSlot};
use crate::geometry::Rect;

/// Projectile width.
pub const PROJECTILE_WIDTH: f32 = 22.0;
/// Projectile height.
pub const PROJECTILE_HEIGHT: f32 = 14.0;
/// Horizontal speed per frame.
pub const PROJECTILE_SPEED: f32 = 6.0;
/// Spawn distance in front of the thrower.
pub const SPAWN_OFFSET_X: f32 = 30.0;
/// Spawn height above the ground baseline.
pub const SPAWN_HEIGHT: f32 = 18.0;

/// Fixed payload every projectile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileHit {
    /// Who threw it.
    pub owner: PlayerSlot,
    /// Health removed.
    pub damage: u32,
    /// Action-lock frames inflicted.
    pub stun: u32,
    /// Horizontal push.
    pub knockback: u32,
}

impl ProjectileHit {
    /// Completes the payload with the knockback source position.
    #[must_use]
    pub fn with_source(self, source_x: f32) -> HitInfo {
        HitInfo {
            damage: self.damage,
            stun: self.stun,
            knockback: self.knockback,
            priority: 0,
            source_x,
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    owner: PlayerSlot,
    position: Vec2,
    velocity_x: f32,
    plane: Plane,
    alive: bool,
}

impl Projectile {
    /// Spawns a projectile in front of a thrower standing at `origin_x`.
    #[must_use]
    pub fn spawn(
        owner: PlayerSlot,
        origin_x: f32,
        facing: Facing,
        plane: Plane,
        arena: &ArenaConfig,
    ) -> Self {
        let dir = facing.sign();
        Self {
            owner,
            position: Vec2::new(origin_x + dir * SPAWN_OFFSET_X, arena.ground_y() - SPAWN_HEIGHT),
            velocity_x: PROJECTILE_SPEED * dir,
            plane,
            alive: true,
        }
    }

    /// Moves one frame and expires once past either edge plus the margin.
    pub fn update(&mut self, arena: &ArenaConfig) {
        self.position.x += self.velocity_x;
        let x = self.position.x;
        if x < -arena.projectile_margin || x > arena.width + arena.projectile_margin {
            self.alive = false;
        }
    }

    /// The fixed damage payload.
    #[must_use]
    pub fn hit_info(&self) -> ProjectileHit {
        ProjectileHit {
            owner: self.owner,
            damage: 10,
            stun: 10,
            knockback: 8,
        }
    }

    /// Collision rectangle, bottom-anchored at the position and shifted by
    /// the plane offset.
    #[must_use]
    pub fn bounds(&self, arena: &ArenaConfig) -> Rect {
        Rect::new(
            self.position.x - PROJECTILE_WIDTH / 2.0,
            self.position.y - PROJECTILE_HEIGHT + arena.plane_offset(self.plane),
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        )
    }

    /// Marks the projectile spent.
    pub fn expire(&mut self) {
        self.alive = false;
    }

    /// Thrower.
    #[must_use]
    pub fn owner(&self) -> PlayerSlot {
        self.owner
    }

    /// The fighter this projectile can hit.
    #[must_use]
    pub fn target(&self) -> PlayerSlot {
        self.owner.opponent()
    }

    /// Anchor position (horizontal centre, bottom edge).
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal speed.
    #[must_use]
    pub fn velocity_x(&self) -> f32 {
        self.velocity_x
    }

    /// Plane it was thrown on.
    #[must_use]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Whether it is still in play.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
