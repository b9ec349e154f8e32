//! Heads-up display state: banner, health bars, round label.
//!
//! The HUD is fed after each frame from that frame's [`EventLog`] and the
//! fighters. It only produces strings and countdowns; presenting them is up
//! to the host.
//!
//! # Example
//!
//! ```
//! use twinplane_core::config::ArenaConfig;
//! use twinplane_core::events::EventLog;
//! use twinplane_core::fighter::{Archetype, Fighter, PlayerSlot};
//! use twinplane_core::hud::Hud;
//!
//! let arena = ArenaConfig::default();
//! let fighters = [
//!     Fighter::new(PlayerSlot::One, Archetype::Hero, 300.0, &arena),
//!     Fighter::new(PlayerSlot::Two, Archetype::Rival, 600.0, &arena),
//! ];
//! let mut events = EventLog::new();
//! events.announce("READY?", 60);
//!
//! let mut hud = Hud::new();
//! hud.update(&events, &fighters);
//!
//! assert_eq!(hud.announcement().unwrap().text, "READY?");
//! assert_eq!(hud.health_bar_width(PlayerSlot::Two), "100%");
//! assert_eq!(hud.round_label(), "ROUND 1");
//! ```

use serde::{Deserialize, Serialize};

use crate::events::{EventLog, FrameEvent};
use crate::fighter::{Fighter, PlayerSlot, MAX_HEALTH};

/// The banner currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudAnnouncement {
    /// Banner text.
    pub text: String,
    /// Frames left on screen.
    pub remaining: u32,
}

/// Presentation-facing state derived from the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    announcement: Option<HudAnnouncement>,
    health: [u32; 2],
    round: u32,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    /// Full health bars, round one, no banner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            announcement: None,
            health: [MAX_HEALTH; 2],
            round: 1,
        }
    }

    /// Folds in one finished frame.
    ///
    /// The current banner loses a frame first, then any banner raised this
    /// frame replaces it (the last one raised wins).
    pub fn update(&mut self, events: &EventLog, fighters: &[Fighter; 2]) {
        if let Some(current) = self.announcement.as_mut() {
            current.remaining = current.remaining.saturating_sub(1);
        }
        if self.announcement.as_ref().is_some_and(|a| a.remaining == 0) {
            self.announcement = None;
        }

        for event in events.iter() {
            match event {
                FrameEvent::Announce(a) => {
                    self.announcement = Some(HudAnnouncement {
                        text: a.text.clone(),
                        remaining: a.frames,
                    });
                }
                FrameEvent::RoundStarted { round } => self.round = *round,
                _ => {}
            }
        }

        for fighter in fighters {
            self.health[fighter.slot().index()] = fighter.health_percent();
        }
    }

    /// The visible banner, if any.
    #[must_use]
    pub fn announcement(&self) -> Option<&HudAnnouncement> {
        self.announcement.as_ref().filter(|a| a.remaining > 0)
    }

    /// CSS width of a health bar, e.g. `"94%"`.
    #[must_use]
    pub fn health_bar_width(&self, slot: PlayerSlot) -> String {
        format!("{}%", self.health[slot.index()])
    }

    /// Round label, e.g. `"ROUND 2"`.
    #[must_use]
    pub fn round_label(&self) -> String {
        format!("ROUND {}", self.round)
    }
}
