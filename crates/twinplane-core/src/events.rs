//! Events raised during a frame, for the presentation layer and telemetry.
//!
//! Fighters and resolvers never touch UI state. They push [`FrameEvent`]s
//! into an [`EventLog`]; the [`Hud`](crate::hud::Hud) and any external
//! consumer read them after the frame completes.

use serde::{Deserialize, Serialize};

use crate::fighter::{Plane, PlayerSlot};

/// A banner message and how many frames it stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Banner text.
    pub text: String,
    /// Visible duration in frames.
    pub frames: u32,
}

/// What landed a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    /// A melee hitbox.
    Melee,
    /// A projectile.
    Projectile,
}

/// Something observable that happened this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// Show a banner.
    Announce(Announcement),
    /// A fighter switched planes.
    PlaneSwitched {
        /// Who switched.
        slot: PlayerSlot,
        /// The plane they are now on.
        plane: Plane,
    },
    /// A projectile entered play.
    ProjectileSpawned {
        /// Who threw it.
        owner: PlayerSlot,
    },
    /// A hit was applied.
    Hit {
        /// Who dealt it.
        attacker: PlayerSlot,
        /// Who took it.
        defender: PlayerSlot,
        /// Health removed, after block scaling.
        damage: u32,
        /// Whether the defender was guarding.
        blocked: bool,
        /// Melee or projectile.
        source: HitSource,
    },
    /// A fighter's health reached zero.
    KnockOut {
        /// The fighter knocked out.
        loser: PlayerSlot,
    },
    /// A round began (fight phase entered).
    RoundStarted {
        /// Round number.
        round: u32,
    },
    /// A round ended.
    RoundOver {
        /// Round number.
        round: u32,
    },
}

/// Ordered collection of the events raised in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<FrameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    /// Appends a banner.
    pub fn announce(&mut self, text: impl Into<String>, frames: u32) {
        self.push(FrameEvent::Announce(Announcement {
            text: text.into(),
            frames,
        }));
    }

    /// Events in the order raised.
    pub fn iter(&self) -> impl Iterator<Item = &FrameEvent> {
        self.events.iter()
    }

    /// Banners raised, in order.
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.events.iter().filter_map(|e| match e {
            FrameEvent::Announce(a) => Some(a),
            _ => None,
        })
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the log.
    #[must_use]
    pub fn into_vec(self) -> Vec<FrameEvent> {
        self.events
    }
}
