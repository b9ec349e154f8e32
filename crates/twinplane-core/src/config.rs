//! Match configuration: arena dimensions, physics constants, spawn points
//! and key maps.
//!
//! Every field has a default matching the shipped game, so a configuration
//! file only needs to name what it changes:
//!
//! ```
//! use twinplane_core::config::FightConfig;
//!
//! let config = FightConfig::from_json(r#"{ "arena": { "width": 1280.0 } }"#).unwrap();
//! assert!((config.arena.width - 1280.0).abs() < f32::EPSILON);
//! assert!((config.arena.gravity - 0.9).abs() < f32::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fighter::Plane;
use crate::input::KeyMap;

/// Errors raised while loading or validating a [`FightConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not fit the schema.
    #[error("failed to parse fight config: {0}")]
    Json(#[from] serde_json::Error),

    /// Width or height is zero, negative or not finite.
    #[error("arena dimensions must be positive, got {width}x{height}")]
    InvalidArena {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },

    /// Friction outside `[0, 1]` would amplify velocity every frame.
    #[error("friction must lie in [0, 1], got {0}")]
    InvalidFriction(f32),

    /// A spawn fraction outside `[0, 1]` places a fighter off-screen.
    #[error("spawn fraction for player {player} must lie in [0, 1], got {value}")]
    InvalidSpawn {
        /// 1-based player number.
        player: usize,
        /// Configured fraction.
        value: f32,
    },

    /// A player has no bound keys and could never act.
    #[error("key map for player {0} is empty")]
    EmptyKeyMap(usize),
}

/// Arena geometry and per-frame physics constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Ground line as a fraction of the height.
    pub ground_ratio: f32,
    /// Vertical screen offset of each plane, front then back.
    pub plane_offsets: [f32; 2],
    /// Added to vertical velocity every airborne frame.
    pub gravity: f32,
    /// Multiplicative horizontal velocity decay per frame.
    pub friction: f32,
    /// Horizontal margin fighters cannot enter on either side.
    pub wall_margin: f32,
    /// Distance past either edge at which projectiles expire.
    pub projectile_margin: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            ground_ratio: 0.60,
            plane_offsets: [0.0, 48.0],
            gravity: 0.9,
            friction: 0.82,
            wall_margin: 40.0,
            projectile_margin: 40.0,
        }
    }
}

impl ArenaConfig {
    /// The ground baseline in screen space.
    #[must_use]
    pub fn ground_y(&self) -> f32 {
        self.height * self.ground_ratio
    }

    /// The vertical screen offset of `plane`.
    #[must_use]
    pub fn plane_offset(&self, plane: Plane) -> f32 {
        self.plane_offsets[plane.index()]
    }

    /// Leftmost x a fighter may occupy.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.wall_margin
    }

    /// Rightmost x a fighter may occupy.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.width - self.wall_margin
    }
}

/// Complete configuration for a [`Match`](crate::simulation::Match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    /// Arena and physics.
    pub arena: ArenaConfig,
    /// Starting x of each player as a fraction of the arena width.
    pub spawn_fractions: [f32; 2],
    /// Key map for player one then player two.
    pub key_maps: [KeyMap; 2],
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            spawn_fractions: [0.3, 0.7],
            key_maps: [KeyMap::player_one(), KeyMap::player_two()],
        }
    }
}

impl FightConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the other
    /// variants for values [`validate`](Self::validate) rejects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(arena.width) || !positive(arena.height) {
            return Err(ConfigError::InvalidArena {
                width: arena.width,
                height: arena.height,
            });
        }
        if !(0.0..=1.0).contains(&arena.friction) {
            return Err(ConfigError::InvalidFriction(arena.friction));
        }
        for (i, value) in self.spawn_fractions.iter().enumerate() {
            if !(0.0..=1.0).contains(value) {
                return Err(ConfigError::InvalidSpawn {
                    player: i + 1,
                    value: *value,
                });
            }
        }
        for (i, map) in self.key_maps.iter().enumerate() {
            if map.is_empty() {
                return Err(ConfigError::EmptyKeyMap(i + 1));
            }
        }
        Ok(())
    }

    /// Spawn x for the player at `index` (0 or 1).
    #[must_use]
    pub fn spawn_x(&self, index: usize) -> f32 {
        self.arena.width * self.spawn_fractions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ground_is_sixty_percent_of_height() {
        let arena = ArenaConfig::default();
        assert!((arena.ground_y() - 324.0).abs() < 0.001);
        assert!((arena.plane_offset(Plane::Back) - 48.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_config_validates() {
        assert!(FightConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = FightConfig::from_json("{}").unwrap();
        assert_eq!(config, FightConfig::default());
    }

    #[test]
    fn round_trips_through_json() {
        let config = FightConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = FightConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = FightConfig::from_json("{ arena: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = FightConfig::from_json(r#"{ "arena": { "width": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArena { .. }));
    }

    #[test]
    fn amplifying_friction_is_rejected() {
        let err = FightConfig::from_json(r#"{ "arena": { "friction": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFriction(_)));
    }

    #[test]
    fn offscreen_spawn_is_rejected() {
        let err = FightConfig::from_json(r#"{ "spawn_fractions": [0.3, 1.2] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpawn { player: 2, .. }));
    }

    #[test]
    fn empty_key_map_is_rejected() {
        let err = FightConfig::from_json(r#"{ "key_maps": [{}, { "KeyK": "light" }] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKeyMap(1)));
        assert_eq!(err.to_string(), "key map for player 1 is empty");
    }

    #[test]
    fn spawn_x_scales_with_width() {
        let config = FightConfig::default();
        assert!((config.spawn_x(0) - 288.0).abs() < 0.001);
        assert!((config.spawn_x(1) - 672.0).abs() < 0.001);
    }
}
