//! # Twinplane Core
//!
//! Frame-stepped simulation core for a two-player fighting game played on two
//! parallel depth planes.
//!
//! The crate owns everything that decides the fight: input recognition,
//! fighter physics and attacks, hit resolution, projectiles, and the round
//! cycle. Presentation is reduced to data: HUD strings and an ordered draw
//! list.
//!
//! ## Architecture
//!
//! - **Input**: [`input::InputRouter`] fans key events to one
//!   [`input::InputRecognizer`] per player
//! - **Entities**: [`fighter::Fighter`] and [`projectile::Projectile`]
//! - **Resolvers**: [`resolver::MeleeResolver`] then
//!   [`resolver::ProjectileResolver`] turn contact into damage
//! - **Flow**: [`round::RoundController`] runs intro, fight and round-over
//! - **Output**: [`hud::Hud`] and [`render::build_draw_list`]
//!
//! [`simulation::Match`] ties these together; one call to
//! [`simulation::Match::step`] is one frame at 60 frames per second.
//!
//! ## Usage
//!
//! ```
//! use twinplane_core::config::FightConfig;
//! use twinplane_core::input::KeyEvent;
//! use twinplane_core::render::{build_draw_list, NoSheets};
//! use twinplane_core::Match;
//!
//! let config = FightConfig::from_json(r#"{ "spawn_fractions": [0.25, 0.75] }"#).unwrap();
//! let mut game = Match::new(config);
//!
//! let out = game.step(&[KeyEvent::down("KeyD", 0)]);
//! assert_eq!(out.frame, 1);
//!
//! let commands = build_draw_list(&game, &NoSheets);
//! assert!(!commands.is_empty());
//! assert_eq!(game.hud().round_label(), "ROUND 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod events;
pub mod fighter;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod projectile;
pub mod render;
pub mod resolver;
pub mod round;
pub mod simulation;

pub use config::{ConfigError, FightConfig};
pub use fighter::{Archetype, Fighter, Plane, PlayerSlot};
pub use simulation::{FrameOutput, Match};

#[cfg(test)]
mod tests;
