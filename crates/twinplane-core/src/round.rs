//! Round flow: intro, fight, round-over, and back to fight.
//!
//! The [`RoundController`] owns the round counter, the current
//! [`MatchPhase`] and the delayed `FIGHT!` banner. All three advance once per
//! frame in [`RoundController::tick`]; nothing fires between frames.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ArenaConfig;
use crate::events::{EventLog, FrameEvent};
use crate::fighter::Fighter;
use crate::projectile::Projectile;

/// Length of the opening intro (about 900 ms).
pub const INTRO_FRAMES: u32 = 54;
/// Pause between a knock-out and the next round (about 2200 ms).
pub const ROUND_OVER_FRAMES: u32 = 132;
/// Delay from `READY?` to `FIGHT!`.
pub const FIGHT_BANNER_DELAY: u32 = 60;
/// Duration of the round, `READY?` and `FIGHT!` banners.
pub const ROUND_BANNER_FRAMES: u32 = 60;

/// Where the match is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum MatchPhase {
    /// Before the first round; fighters are frozen.
    Intro {
        /// Frames until the first round starts.
        remaining: u32,
    },
    /// Fighters update and hits resolve.
    Fight,
    /// Someone was knocked out; fighters are frozen.
    RoundOver {
        /// Frames until the next round starts.
        remaining: u32,
    },
}

impl MatchPhase {
    /// Whether fighters update this frame.
    #[must_use]
    pub const fn is_fight(self) -> bool {
        matches!(self, Self::Fight)
    }
}

/// Drives the round cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundController {
    round: u32,
    phase: MatchPhase,
    fight_banner_in: Option<u32>,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundController {
    /// Round one, in the intro.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: 1,
            phase: MatchPhase::Intro {
                remaining: INTRO_FRAMES,
            },
            fight_banner_in: None,
        }
    }

    /// Announces the opening round.
    pub fn open(&self, events: &mut EventLog) {
        events.announce(format!("ROUND {}", self.round), ROUND_BANNER_FRAMES);
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Frames until the pending `FIGHT!` banner, if one is scheduled.
    #[must_use]
    pub fn fight_banner_in(&self) -> Option<u32> {
        self.fight_banner_in
    }

    /// Advances countdowns by one frame and reacts to knock-outs.
    pub fn tick(
        &mut self,
        fighters: &mut [Fighter; 2],
        projectiles: &mut Vec<Projectile>,
        arena: &ArenaConfig,
        events: &mut EventLog,
    ) {
        if let Some(remaining) = self.fight_banner_in {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.fight_banner_in = None;
                events.announce("FIGHT!", ROUND_BANNER_FRAMES);
            } else {
                self.fight_banner_in = Some(remaining);
            }
        }

        match self.phase {
            MatchPhase::Intro { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.reset_round(fighters, projectiles, arena, events);
                } else {
                    self.phase = MatchPhase::Intro { remaining };
                }
            }
            MatchPhase::Fight => {
                if fighters.iter().any(Fighter::is_dead) {
                    self.phase = MatchPhase::RoundOver {
                        remaining: ROUND_OVER_FRAMES,
                    };
                    info!(round = self.round, "round over");
                    events.push(FrameEvent::RoundOver { round: self.round });
                }
            }
            MatchPhase::RoundOver { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.round += 1;
                    for fighter in fighters.iter_mut() {
                        fighter.restore_health();
                    }
                    self.reset_round(fighters, projectiles, arena, events);
                } else {
                    self.phase = MatchPhase::RoundOver { remaining };
                }
            }
        }
    }

    /// Puts both fighters back in fighting shape and enters the fight phase.
    ///
    /// Clears the projectile list, announces `READY?` and schedules `FIGHT!`
    /// [`FIGHT_BANNER_DELAY`] frames later. Health is left alone.
    pub fn reset_round(
        &mut self,
        fighters: &mut [Fighter; 2],
        projectiles: &mut Vec<Projectile>,
        arena: &ArenaConfig,
        events: &mut EventLog,
    ) {
        for fighter in fighters.iter_mut() {
            fighter.reset_for_round(arena);
        }
        projectiles.clear();

        self.phase = MatchPhase::Fight;
        self.fight_banner_in = Some(FIGHT_BANNER_DELAY);
        events.announce("READY?", ROUND_BANNER_FRAMES);
        events.push(FrameEvent::RoundStarted { round: self.round });
        info!(round = self.round, "round started");
    }
}
