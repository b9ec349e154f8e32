//! The frame loop.
//!
//! [`Match`] owns every piece of state: both fighters, the projectile list,
//! the input router, the round controller and the HUD. [`Match::step`] is one
//! display frame and always runs in the same order:
//!
//! 1. **INPUT**: apply the frame's key events to both recognizers
//! 2. **UPDATE**: player one, then player two (fight phase only)
//! 3. **RESOLVE**: melee both ways, then projectiles (fight phase only)
//! 4. **ROUND**: phase countdowns and knock-out detection
//! 5. **HUD**: banner countdown, health bars, round label
//!
//! Nothing is scheduled outside this order; every delayed effect is a frame
//! counter on its owner.
//!
//! # Example
//!
//! ```
//! use twinplane_core::input::KeyEvent;
//! use twinplane_core::round::INTRO_FRAMES;
//! use twinplane_core::simulation::Match;
//!
//! let mut game = Match::default();
//! for _ in 0..INTRO_FRAMES {
//!     game.step(&[]);
//! }
//! assert!(game.phase().is_fight());
//!
//! let out = game.step(&[KeyEvent::down("KeyD", 1000)]);
//! assert_eq!(out.frame, u64::from(INTRO_FRAMES) + 1);
//! assert!(game.fighters()[0].velocity().x > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{ArenaConfig, FightConfig};
use crate::events::{EventLog, FrameEvent};
use crate::fighter::{Archetype, Fighter, PlayerSlot};
use crate::hud::Hud;
use crate::input::{InputRouter, KeyEvent};
use crate::projectile::Projectile;
use crate::resolver::{MeleeResolver, ProjectileResolver, Resolver};
use crate::round::{MatchPhase, RoundController};

/// Resolvers in execution order.
const RESOLVERS: [&dyn Resolver; 2] = [&MeleeResolver, &ProjectileResolver];

// =============================================================================
// FrameContext
// =============================================================================

/// Shared mutable state handed to fighters and resolvers for one frame.
///
/// Holds the arena constants, the projectile list (fighters append to it)
/// and the event sink. Nothing else in the frame is reachable through it.
#[derive(Debug)]
pub struct FrameContext<'a> {
    /// Arena and physics constants.
    pub arena: &'a ArenaConfig,
    /// Projectiles in flight, in spawn order.
    pub projectiles: &'a mut Vec<Projectile>,
    /// Events raised so far this frame.
    pub events: &'a mut EventLog,
}

impl<'a> FrameContext<'a> {
    /// Bundles the frame's shared state.
    pub fn new(
        arena: &'a ArenaConfig,
        projectiles: &'a mut Vec<Projectile>,
        events: &'a mut EventLog,
    ) -> Self {
        Self {
            arena,
            projectiles,
            events,
        }
    }
}

// =============================================================================
// Match
// =============================================================================

/// What one [`Match::step`] produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Frames completed, including this one.
    pub frame: u64,
    /// Phase after the frame.
    pub phase: MatchPhase,
    /// Events raised during the frame, in order.
    pub events: Vec<FrameEvent>,
}

/// A running two-player match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    config: FightConfig,
    fighters: [Fighter; 2],
    projectiles: Vec<Projectile>,
    router: InputRouter,
    round: RoundController,
    hud: Hud,
    frame: u64,
    /// Events raised outside a step, emitted with the next one.
    pending: EventLog,
}

impl Match {
    /// Sets up round one: Hero as player one, Rival as player two, both at
    /// their configured spawn points. The match opens in the intro phase.
    #[must_use]
    pub fn new(config: FightConfig) -> Self {
        let arena = &config.arena;
        let fighters = [
            Fighter::new(PlayerSlot::One, Archetype::Hero, config.spawn_x(0), arena),
            Fighter::new(PlayerSlot::Two, Archetype::Rival, config.spawn_x(1), arena),
        ];
        let router = InputRouter::new(config.key_maps.clone());
        let round = RoundController::new();
        let mut pending = EventLog::new();
        round.open(&mut pending);

        Self {
            config,
            fighters,
            projectiles: Vec::new(),
            router,
            round,
            hud: Hud::new(),
            frame: 0,
            pending,
        }
    }

    /// Advances one frame with the key events that arrived since the last.
    pub fn step(&mut self, input: &[KeyEvent]) -> FrameOutput {
        let mut events = std::mem::take(&mut self.pending);

        for event in input {
            self.router.apply(event);
        }

        if self.round.phase().is_fight() {
            let mut ctx = FrameContext::new(&self.config.arena, &mut self.projectiles, &mut events);

            let [p1, p2] = &mut self.fighters;
            p1.update(self.router.recognizer(PlayerSlot::One), p2, &mut ctx);
            p2.update(self.router.recognizer(PlayerSlot::Two), p1, &mut ctx);

            for resolver in RESOLVERS {
                resolver.resolve(&mut self.fighters, &mut ctx);
            }
        }

        self.round.tick(
            &mut self.fighters,
            &mut self.projectiles,
            &self.config.arena,
            &mut events,
        );
        self.hud.update(&events, &self.fighters);
        self.frame += 1;

        trace!(
            frame = self.frame,
            events = events.len(),
            projectiles = self.projectiles.len(),
            "frame stepped"
        );

        FrameOutput {
            frame: self.frame,
            phase: self.round.phase(),
            events: events.into_vec(),
        }
    }

    /// Pure form of [`step`](Self::step): returns the next state and its
    /// output, leaving `self` untouched.
    #[must_use]
    pub fn advanced(&self, input: &[KeyEvent]) -> (Match, FrameOutput) {
        let mut next = self.clone();
        let output = next.step(input);
        (next, output)
    }

    /// Configuration the match was built from.
    #[must_use]
    pub fn config(&self) -> &FightConfig {
        &self.config
    }

    /// Both fighters, player one first.
    #[must_use]
    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    /// The fighter in `slot`.
    #[must_use]
    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    /// Mutable access to the fighter in `slot`, for scripted setups.
    pub fn fighter_mut(&mut self, slot: PlayerSlot) -> &mut Fighter {
        &mut self.fighters[slot.index()]
    }

    /// Projectiles in flight, in spawn order.
    #[must_use]
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Input state of both players.
    #[must_use]
    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Round controller.
    #[must_use]
    pub fn round(&self) -> &RoundController {
        &self.round
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.round.phase()
    }

    /// HUD state after the last frame.
    #[must_use]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Frames stepped so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(FightConfig::default())
    }
}
