//! Fighter entity: movement, guarding, attacks, damage and animation.
//!
//! A [`Fighter`] owns its attack and animation state exclusively. Each frame
//! [`Fighter::update`] reads the player's [`InputRecognizer`] and the
//! opponent, integrates physics and advances animation. Damage only arrives
//! through [`Fighter::take_hit`], called by the resolvers.
//!
//! # Action lock
//!
//! A single counter, `action_lock`, freezes the fighter while positive. Two
//! causes write it: starting any move through [`Fighter::start_attack`] sets
//! it to [`ATTACK_SELF_LOCK`], and taking a hit raises it to the inflicted
//! stun. The two causes are not distinguishable afterwards.
//!
//! # Example
//!
//! ```
//! use twinplane_core::config::ArenaConfig;
//! use twinplane_core::events::EventLog;
//! use twinplane_core::fighter::{Archetype, Fighter, HitInfo, PlayerSlot};
//!
//! let arena = ArenaConfig::default();
//! let mut fighter = Fighter::new(PlayerSlot::One, Archetype::Hero, 300.0, &arena);
//! let mut events = EventLog::new();
//!
//! let hit = HitInfo { damage: 10, stun: 10, knockback: 10, priority: 1, source_x: 250.0 };
//! let outcome = fighter.take_hit(&hit, true, &mut events).unwrap();
//!
//! assert_eq!(outcome.damage, 2);
//! assert_eq!(fighter.health(), 98);
//! assert_eq!(fighter.action_lock(), 6);
//! ```

pub mod anim;
pub mod archetype;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::ArenaConfig;
use crate::events::{EventLog, FrameEvent};
use crate::geometry::{overlaps, Rect};
use crate::input::{Action, InputRecognizer};
use crate::projectile::Projectile;
use crate::simulation::FrameContext;

pub use anim::{Animation, Pose, PoseFrames, SpriteAtlas, STANDARD_ATLAS};
pub use archetype::{
    special_bonus, special_move_for, Archetype, AttackKind, AttackSpec, Body, HitSpec, Impulse,
    SpecialBonus, Tuning,
};

/// Full health.
pub const MAX_HEALTH: u32 = 100;
/// Action lock set by starting any move.
pub const ATTACK_SELF_LOCK: u32 = 6;
/// Guard pose lingers this many frames after letting go of back.
pub const GUARD_RESIDUAL_FRAMES: u32 = 3;
/// Guard pose held after blocking a hit.
pub const BLOCK_GUARD_FRAMES: u32 = 6;
/// Frames between plane switches (about 220 ms).
pub const PLANE_SWITCH_COOLDOWN: u32 = 13;
/// Frames between homing dashes (about 350 ms).
pub const HOMING_COOLDOWN: u32 = 21;
/// Distance each fighter is pushed per clinching frame.
pub const CLINCH_PUSH: f32 = 2.0;
/// Clinch timer value while clinching.
pub const CLINCH_FRAMES: u32 = 8;
/// Walk acceleration multiplier while crouching.
pub const CROUCH_SPEED_FACTOR: f32 = 0.55;
/// Horizontal speed above which the walk pose plays.
pub const WALK_THRESHOLD: f32 = 0.6;
/// Upward velocity nudge on every hit.
pub const HIT_LIFT: f32 = 2.0;
/// Duration of move banners.
pub const MOVE_BANNER_FRAMES: u32 = 35;
/// Duration of plane-switch banners.
pub const PLANE_BANNER_FRAMES: u32 = 45;
/// Duration of the knock-out banner.
pub const KO_BANNER_FRAMES: u32 = 180;

// =============================================================================
// Identity and orientation
// =============================================================================

/// Which player a fighter or projectile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Player one.
    One,
    /// Player two.
    Two,
}

impl PlayerSlot {
    /// Both slots in order.
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Array index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The other slot.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "P1"),
            Self::Two => write!(f, "P2"),
        }
    }
}

/// Depth lane. Fighters and projectiles only interact within one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Plane {
    /// Plane 0, nearest the viewer.
    #[default]
    Front,
    /// Plane 1.
    Back,
}

impl Plane {
    /// Numeric plane (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Back => 1,
        }
    }

    /// The other plane.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "FRONT"),
            Self::Back => write!(f, "BACK"),
        }
    }
}

/// Horizontal facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward +x.
    Right,
    /// Toward -x.
    Left,
}

impl Facing {
    /// +1 facing right, -1 facing left.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Whether facing right.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Direction toward the opponent.
    #[must_use]
    pub const fn forward_action(self) -> Action {
        Action::forward(self.is_right())
    }

    /// Direction away from the opponent.
    #[must_use]
    pub const fn back_action(self) -> Action {
        Action::forward(!self.is_right())
    }
}

// =============================================================================
// Hits
// =============================================================================

/// A hit as delivered to [`Fighter::take_hit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitInfo {
    /// Health removed.
    pub damage: u32,
    /// Action-lock frames inflicted.
    pub stun: u32,
    /// Horizontal push.
    pub knockback: u32,
    /// Priority tier. Carried, never compared.
    pub priority: u8,
    /// x of whatever dealt the hit; the defender is pushed away from it.
    pub source_x: f32,
}

impl HitInfo {
    /// The reduced hit a guarding defender takes.
    ///
    /// Damage becomes `max(2, ⌊d × 0.2⌋)`, knockback `⌊k × 0.3⌋` and stun
    /// `max(6, ⌊s × 0.6⌋)`.
    #[must_use]
    pub fn blocked(&self) -> Self {
        Self {
            damage: (self.damage / 5).max(2),
            stun: (self.stun * 6 / 10).max(6),
            knockback: self.knockback * 3 / 10,
            ..*self
        }
    }
}

/// An active melee hitbox in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Area.
    pub rect: Rect,
    /// Health removed.
    pub damage: u32,
    /// Action-lock frames inflicted.
    pub stun: u32,
    /// Horizontal push.
    pub knockback: u32,
    /// Priority tier.
    pub priority: u8,
}

impl Hitbox {
    /// Converts to a deliverable hit from a source at `source_x`.
    #[must_use]
    pub fn to_hit_info(&self, source_x: f32) -> HitInfo {
        HitInfo {
            damage: self.damage,
            stun: self.stun,
            knockback: self.knockback,
            priority: self.priority,
            source_x,
        }
    }
}

/// What [`Fighter::take_hit`] actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    /// Damage after block scaling.
    pub damage: u32,
    /// Stun after block scaling.
    pub stun: u32,
    /// Knockback after block scaling.
    pub knockback: u32,
    /// Whether the hit was blocked.
    pub blocked: bool,
    /// Whether this hit knocked the fighter out.
    pub knocked_out: bool,
}

/// The move a fighter is currently performing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveAttack {
    /// Which move.
    pub kind: AttackKind,
    /// Frames left.
    pub remaining: u32,
    /// Hitbox spec with `dx` already signed by facing at start.
    pub hit: Option<HitSpec>,
    /// Forced animation rate for the attack pose.
    pub anim_fps: f32,
}

// =============================================================================
// Fighter
// =============================================================================

/// One of the two combatants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    slot: PlayerSlot,
    archetype: Archetype,
    position: Vec2,
    velocity: Vec2,
    plane: Plane,
    facing: Facing,
    grounded: bool,
    crouching: bool,
    guarding: bool,
    health: u32,
    action_lock: u32,
    attack: Option<ActiveAttack>,
    dead: bool,
    guard_timer: u32,
    clinch_timer: u32,
    plane_switch_cooldown: u32,
    homing_cooldown: u32,
    anim: Animation,
}

impl Fighter {
    /// Creates a grounded fighter at `x` on the front plane with full health.
    ///
    /// Player one starts facing right, player two facing left.
    #[must_use]
    pub fn new(slot: PlayerSlot, archetype: Archetype, x: f32, arena: &ArenaConfig) -> Self {
        Self {
            slot,
            archetype,
            position: Vec2::new(x, arena.ground_y()),
            velocity: Vec2::ZERO,
            plane: Plane::Front,
            facing: match slot {
                PlayerSlot::One => Facing::Right,
                PlayerSlot::Two => Facing::Left,
            },
            grounded: true,
            crouching: false,
            guarding: false,
            health: MAX_HEALTH,
            action_lock: 0,
            attack: None,
            dead: false,
            guard_timer: 0,
            clinch_timer: 0,
            plane_switch_cooldown: 0,
            homing_cooldown: 0,
            anim: Animation::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Per-frame update
    // -------------------------------------------------------------------------

    /// Advances this fighter by one frame.
    ///
    /// Does nothing once dead. While the action lock is positive only the
    /// facing, guard state, cooldowns and animation move.
    pub fn update(
        &mut self,
        input: &InputRecognizer,
        opponent: &mut Fighter,
        ctx: &mut FrameContext<'_>,
    ) {
        if self.dead {
            return;
        }

        self.plane_switch_cooldown = self.plane_switch_cooldown.saturating_sub(1);
        self.homing_cooldown = self.homing_cooldown.saturating_sub(1);

        self.facing = if self.position.x < opponent.position.x {
            Facing::Right
        } else {
            Facing::Left
        };
        self.update_guard(input, opponent);

        if self.action_lock > 0 {
            self.action_lock -= 1;
            self.advance_anim();
            return;
        }

        let tuning = self.tuning();
        let speed = if self.crouching {
            tuning.speed * CROUCH_SPEED_FACTOR
        } else {
            tuning.speed
        };
        if input.is_held(Action::Left) {
            self.velocity.x -= speed;
        }
        if input.is_held(Action::Right) {
            self.velocity.x += speed;
        }

        self.crouching = input.is_held(Action::Down) && self.grounded;
        if input.is_held(Action::Up) && self.grounded {
            self.velocity.y = tuning.jump_velocity;
            self.grounded = false;
        }

        self.try_plane_switch(input, ctx);
        self.try_homing(input, opponent, ctx);

        if self.attack.is_none() {
            self.trigger_attacks(input, ctx);
        }

        self.integrate(ctx.arena);
        self.handle_clinch(opponent, ctx.arena);

        if let Some(attack) = self.attack.as_mut() {
            attack.remaining = attack.remaining.saturating_sub(1);
        }
        if self.attack.is_some_and(|a| a.remaining == 0) {
            self.attack = None;
        }

        self.advance_anim();
    }

    fn update_guard(&mut self, input: &InputRecognizer, opponent: &Fighter) {
        let holding_back = input.is_held(self.facing.back_action());
        self.guarding = self.grounded && self.plane == opponent.plane && holding_back;
        self.guard_timer = if self.guarding {
            GUARD_RESIDUAL_FRAMES
        } else {
            self.guard_timer.saturating_sub(1)
        };
    }

    fn try_plane_switch(&mut self, input: &InputRecognizer, ctx: &mut FrameContext<'_>) {
        if !input.is_held(Action::Plane) || self.plane_switch_cooldown > 0 {
            return;
        }
        self.plane = self.plane.toggled();
        self.plane_switch_cooldown = PLANE_SWITCH_COOLDOWN;
        debug!(slot = %self.slot, plane = %self.plane, "plane switch");
        ctx.events.push(FrameEvent::PlaneSwitched {
            slot: self.slot,
            plane: self.plane,
        });
        ctx.events.announce(self.plane.to_string(), PLANE_BANNER_FRAMES);
    }

    fn try_homing(
        &mut self,
        input: &InputRecognizer,
        opponent: &Fighter,
        ctx: &mut FrameContext<'_>,
    ) {
        if self.homing_cooldown > 0 || self.attack.is_some() {
            return;
        }
        if !input.all_held(&[Action::Light, Action::Heavy]) || self.plane == opponent.plane {
            return;
        }
        self.homing_cooldown = HOMING_COOLDOWN;
        self.plane = opponent.plane;
        ctx.events.push(FrameEvent::PlaneSwitched {
            slot: self.slot,
            plane: self.plane,
        });
        let spec = special_move_for(self.archetype, AttackKind::Homing);
        self.begin_attack(&spec, ctx);
    }

    /// Input-driven move triggers. The checks are independent: several can
    /// pass in one frame, and the first to start a move wins because later
    /// ones find an attack already active.
    fn trigger_attacks(&mut self, input: &InputRecognizer, ctx: &mut FrameContext<'_>) {
        let light = input.is_held(Action::Light);
        let heavy = input.is_held(Action::Heavy);

        if light && input.matches_forward_motion(self.facing.is_right()) {
            self.start_attack(AttackKind::Projectile, ctx);
        } else {
            if light {
                self.start_attack(AttackKind::Light, ctx);
            }
            if heavy {
                self.start_attack(AttackKind::Heavy, ctx);
            }
        }
        if heavy && input.is_held(Action::Down) {
            self.fire_special(AttackKind::AntiAir, ctx);
        }
        if heavy && input.is_held(self.facing.forward_action()) {
            self.fire_special(AttackKind::Lunge, ctx);
        }
    }

    fn integrate(&mut self, arena: &ArenaConfig) {
        self.velocity.y += arena.gravity;
        self.position += self.velocity;
        self.velocity.x *= arena.friction;

        let ground = arena.ground_y();
        if self.position.y >= ground {
            self.position.y = ground;
            self.velocity.y = 0.0;
            self.grounded = true;
        }
        self.position.x = self.position.x.clamp(arena.min_x(), arena.max_x());
    }

    // -------------------------------------------------------------------------
    // Attacks and damage
    // -------------------------------------------------------------------------

    /// Starts `kind` using this fighter's archetype spec.
    ///
    /// Returns `false` without touching anything when dead or already
    /// attacking. On success the action lock is set to [`ATTACK_SELF_LOCK`].
    pub fn start_attack(&mut self, kind: AttackKind, ctx: &mut FrameContext<'_>) -> bool {
        if self.dead || self.attack.is_some() {
            return false;
        }
        let spec = special_move_for(self.archetype, kind);
        self.begin_attack(&spec, ctx);
        self.action_lock = ATTACK_SELF_LOCK;
        true
    }

    /// Fires `kind` as this archetype's special.
    ///
    /// Starts the move when possible. When another move is already active
    /// the archetype's [`SpecialBonus`] lands on the current state instead:
    /// extra forward velocity, or extra damage on the active hitbox.
    /// Returns whether the special itself started.
    pub fn fire_special(&mut self, kind: AttackKind, ctx: &mut FrameContext<'_>) -> bool {
        if self.dead {
            return false;
        }
        if self.start_attack(kind, ctx) {
            return true;
        }
        match special_bonus(self.archetype, kind) {
            SpecialBonus::None => {}
            SpecialBonus::ForwardVelocity(v) => self.velocity.x += self.facing.sign() * v,
            SpecialBonus::HitDamage(extra) => {
                if let Some(hit) = self.attack.as_mut().and_then(|a| a.hit.as_mut()) {
                    hit.damage += extra;
                }
            }
        }
        false
    }

    fn begin_attack(&mut self, spec: &AttackSpec, ctx: &mut FrameContext<'_>) {
        let dir = self.facing.sign();

        if spec.spawns_projectile {
            ctx.projectiles.push(Projectile::spawn(
                self.slot,
                self.position.x,
                self.facing,
                self.plane,
                ctx.arena,
            ));
            ctx.events
                .push(FrameEvent::ProjectileSpawned { owner: self.slot });
        }

        self.attack = Some(ActiveAttack {
            kind: spec.kind,
            remaining: spec.frames,
            hit: spec.hit.map(|hit| HitSpec {
                dx: hit.dx * dir,
                ..hit
            }),
            anim_fps: spec.anim_fps,
        });

        match spec.impulse {
            Impulse::None => {}
            Impulse::AddForward(v) => self.velocity.x += dir * v,
            Impulse::SetForward(v) => self.velocity.x = dir * v,
            Impulse::SetVertical(v) => self.velocity.y = v,
        }

        self.anim.set(Pose::Attack, Some(spec.anim_fps));
        if let Some(text) = spec.banner {
            ctx.events.announce(text, MOVE_BANNER_FRAMES);
        }
        debug!(slot = %self.slot, kind = ?spec.kind, x = self.position.x, "attack started");
    }

    /// Applies a hit. Returns `None` (and changes nothing) when already dead.
    ///
    /// Blocked hits are scaled by [`HitInfo::blocked`] and hold the guard
    /// pose; unblocked hits show the hit pose. Either way the fighter is
    /// pushed away from `hit.source_x`, nudged upward, and its action lock
    /// is raised to at least the inflicted stun.
    pub fn take_hit(
        &mut self,
        hit: &HitInfo,
        blocked: bool,
        events: &mut EventLog,
    ) -> Option<HitOutcome> {
        if self.dead {
            return None;
        }

        let applied = if blocked {
            self.guard_timer = BLOCK_GUARD_FRAMES;
            self.anim.set(Pose::Guard, None);
            hit.blocked()
        } else {
            self.anim.set(Pose::Hit, None);
            *hit
        };

        self.health = self.health.saturating_sub(applied.damage);
        let away = if hit.source_x < self.position.x {
            1.0
        } else {
            -1.0
        };
        #[allow(clippy::cast_precision_loss)]
        let push = applied.knockback as f32;
        self.velocity.x += push * away;
        self.velocity.y -= HIT_LIFT;
        self.action_lock = self.action_lock.max(applied.stun);

        let knocked_out = self.health == 0;
        if knocked_out {
            self.dead = true;
            self.anim.set(Pose::Down, None);
            events.announce("K.O.", KO_BANNER_FRAMES);
            events.push(FrameEvent::KnockOut { loser: self.slot });
            info!(slot = %self.slot, "knocked out");
        }
        trace!(slot = %self.slot, health = self.health, blocked, "hit applied");

        Some(HitOutcome {
            damage: applied.damage,
            stun: applied.stun,
            knockback: applied.knockback,
            blocked,
            knocked_out,
        })
    }

    /// Drops the current attack, e.g. after it connects.
    pub fn clear_attack(&mut self) {
        self.attack = None;
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Unshifted body box: centred on x, standing on the baseline.
    #[must_use]
    pub fn body_rect(&self) -> Rect {
        let body = self.tuning().body;
        Rect::new(
            self.position.x - body.w / 2.0,
            self.position.y - body.h,
            body.w,
            body.h,
        )
    }

    /// Where this fighter can be hit: the body box inset by the body pad on
    /// both sides, shifted by the plane offset.
    #[must_use]
    pub fn hurtbox(&self, arena: &ArenaConfig) -> Rect {
        self.body_rect()
            .inset_x(self.tuning().body.pad)
            .shifted_y(arena.plane_offset(self.plane))
    }

    /// The active melee hitbox, if any.
    ///
    /// Centred at `(x + dx, body centre + dy)`, then shifted by the plane
    /// offset.
    #[must_use]
    pub fn hitbox(&self, arena: &ArenaConfig) -> Option<Hitbox> {
        let hit = self.attack?.hit?;
        let body = self.body_rect();
        let centre_y = body.y + body.h / 2.0 + hit.dy;
        let rect = Rect::new(
            self.position.x + hit.dx - hit.w / 2.0,
            centre_y - hit.h / 2.0 + arena.plane_offset(self.plane),
            hit.w,
            hit.h,
        );
        Some(Hitbox {
            rect,
            damage: hit.damage,
            stun: hit.stun,
            knockback: hit.knockback,
            priority: hit.priority,
        })
    }

    /// Pushes two idle, overlapping fighters on the same plane apart.
    ///
    /// This fighter steps back from the side it faces and the opponent
    /// steps the other way; both clinch timers are refreshed. Otherwise this
    /// fighter's clinch timer decays.
    pub fn handle_clinch(&mut self, opponent: &mut Fighter, arena: &ArenaConfig) {
        let engaged = self.plane == opponent.plane
            && self.attack.is_none()
            && opponent.attack.is_none()
            && overlaps(self.hurtbox(arena), opponent.hurtbox(arena));

        if engaged {
            self.clinch_timer = CLINCH_FRAMES;
            opponent.clinch_timer = CLINCH_FRAMES;
            let sep = -self.facing.sign();
            self.position.x += CLINCH_PUSH * sep;
            opponent.position.x -= CLINCH_PUSH * sep;
        } else {
            self.clinch_timer = self.clinch_timer.saturating_sub(1);
        }
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    /// The pose the priority chain selects for the current state.
    #[must_use]
    pub fn derived_pose(&self) -> Pose {
        if self.dead {
            Pose::Down
        } else if self.action_lock > 0 {
            Pose::Hit
        } else if self.guarding || self.guard_timer > 0 {
            Pose::Guard
        } else if self.attack.is_some() {
            Pose::Attack
        } else if !self.grounded {
            Pose::Jump
        } else if self.velocity.x.abs() > WALK_THRESHOLD {
            Pose::Walk
        } else {
            Pose::Idle
        }
    }

    fn advance_anim(&mut self) {
        let pose = self.derived_pose();
        let forced = match (pose, self.attack) {
            (Pose::Attack, Some(attack)) => Some(attack.anim_fps),
            _ => None,
        };
        self.anim.set(pose, forced);
        self.anim.tick(&STANDARD_ATLAS);
    }

    // -------------------------------------------------------------------------
    // Round lifecycle
    // -------------------------------------------------------------------------

    /// Clears transient combat state for a new round.
    ///
    /// Keeps x, health and the plane-switch cooldown.
    pub fn reset_for_round(&mut self, arena: &ArenaConfig) {
        self.position.y = arena.ground_y();
        self.velocity = Vec2::ZERO;
        self.grounded = true;
        self.plane = Plane::Front;
        self.action_lock = 0;
        self.attack = None;
        self.dead = false;
        self.guarding = false;
        self.guard_timer = 0;
        self.homing_cooldown = 0;
    }

    /// Refills health.
    pub fn restore_health(&mut self) {
        self.health = MAX_HEALTH;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Player slot.
    #[must_use]
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Character archetype (also selects the sprite sheet).
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Movement and body constants.
    #[must_use]
    pub fn tuning(&self) -> &'static Tuning {
        self.archetype.tuning()
    }

    /// Anchor: horizontal centre, feet on the baseline.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the anchor.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Velocity per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Overwrites the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Current plane.
    #[must_use]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Moves to `plane` without cooldowns or announcements.
    pub fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    /// Current facing.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Whether standing on the ground.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether crouching.
    #[must_use]
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Whether actively guarding this frame.
    #[must_use]
    pub fn is_guarding(&self) -> bool {
        self.guarding
    }

    /// Health in `0..=100`.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Health as a percentage of [`MAX_HEALTH`].
    #[must_use]
    pub fn health_percent(&self) -> u32 {
        self.health * 100 / MAX_HEALTH
    }

    /// Frames the fighter remains unable to act.
    #[must_use]
    pub fn action_lock(&self) -> u32 {
        self.action_lock
    }

    /// Current attack, if any.
    #[must_use]
    pub fn attack(&self) -> Option<&ActiveAttack> {
        self.attack.as_ref()
    }

    /// Whether knocked out.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Residual guard frames.
    #[must_use]
    pub fn guard_timer(&self) -> u32 {
        self.guard_timer
    }

    /// Clinch timer.
    #[must_use]
    pub fn clinch_timer(&self) -> u32 {
        self.clinch_timer
    }

    /// Frames until the plane can be switched again.
    #[must_use]
    pub fn plane_switch_cooldown(&self) -> u32 {
        self.plane_switch_cooldown
    }

    /// Frames until the next homing dash is allowed.
    #[must_use]
    pub fn homing_cooldown(&self) -> u32 {
        self.homing_cooldown
    }

    /// Animation state.
    #[must_use]
    pub fn animation(&self) -> &Animation {
        &self.anim
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.anim.pose()
    }
}
