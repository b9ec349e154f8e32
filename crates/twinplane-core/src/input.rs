//! Input recognition: logical actions, held-key sets, press history and the
//! forward-motion gesture.
//!
//! Physical key codes are translated to [`Action`]s through one [`KeyMap`]
//! per player. Both players listen to the same key stream via the
//! [`InputRouter`]; a code that is absent from a player's map is ignored for
//! that player.
//!
//! # Example
//!
//! ```
//! use twinplane_core::input::{Action, InputRecognizer};
//!
//! let mut input = InputRecognizer::new();
//! input.press(Action::Right, 0);
//! input.press(Action::Down, 100);
//! assert!(input.matches_forward_motion(true));
//! assert!(input.all_held(&[Action::Right, Action::Down]));
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::fighter::PlayerSlot;

/// Maximum number of press records kept per player.
pub const HISTORY_CAPACITY: usize = 12;

/// Maximum gap between consecutive gesture steps, in milliseconds.
pub const MOTION_WINDOW_MS: u64 = 150;

// =============================================================================
// Actions
// =============================================================================

/// The logical action vocabulary shared by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Jump.
    Up,
    /// Crouch.
    Down,
    /// Light attack.
    Light,
    /// Heavy attack.
    Heavy,
    /// Switch plane.
    Plane,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 7] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Light,
        Action::Heavy,
        Action::Plane,
    ];

    /// The bit this action occupies in an [`ActionSet`].
    #[must_use]
    pub const fn flag(self) -> ActionSet {
        match self {
            Self::Left => ActionSet::LEFT,
            Self::Right => ActionSet::RIGHT,
            Self::Up => ActionSet::UP,
            Self::Down => ActionSet::DOWN,
            Self::Light => ActionSet::LIGHT,
            Self::Heavy => ActionSet::HEAVY,
            Self::Plane => ActionSet::PLANE,
        }
    }

    /// The horizontal direction pointing toward `facing_right`.
    #[must_use]
    pub const fn forward(facing_right: bool) -> Self {
        if facing_right {
            Self::Right
        } else {
            Self::Left
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Light => "light",
            Self::Heavy => "heavy",
            Self::Plane => "plane",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of currently held actions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ActionSet: u8 {
        /// Left held.
        const LEFT = 1 << 0;
        /// Right held.
        const RIGHT = 1 << 1;
        /// Up held.
        const UP = 1 << 2;
        /// Down held.
        const DOWN = 1 << 3;
        /// Light attack held.
        const LIGHT = 1 << 4;
        /// Heavy attack held.
        const HEAVY = 1 << 5;
        /// Plane switch held.
        const PLANE = 1 << 6;
    }
}

// =============================================================================
// Recognizer
// =============================================================================

/// A single key-down, timestamped in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRecord {
    /// The action pressed.
    pub action: Action,
    /// When it was pressed.
    pub at_ms: u64,
}

/// Per-player input state: held actions plus a bounded press history.
///
/// The history is most-recent-first and never holds more than
/// [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecognizer {
    held: ActionSet,
    history: VecDeque<PressRecord>,
}

impl InputRecognizer {
    /// Creates an empty recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `action` held and records the press at `at_ms`.
    pub fn press(&mut self, action: Action, at_ms: u64) {
        self.held.insert(action.flag());
        self.history.push_front(PressRecord { action, at_ms });
        self.history.truncate(HISTORY_CAPACITY);
    }

    /// Clears the held state of `action`. The history is untouched.
    pub fn release(&mut self, action: Action) {
        self.held.remove(action.flag());
    }

    /// Releases everything and forgets the history.
    pub fn clear(&mut self) {
        self.held = ActionSet::empty();
        self.history.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(action.flag())
    }

    /// Chord test: true iff every action in `actions` is held.
    #[must_use]
    pub fn all_held(&self, actions: &[Action]) -> bool {
        actions.iter().all(|a| self.is_held(*a))
    }

    /// The full held set.
    #[must_use]
    pub fn held(&self) -> ActionSet {
        self.held
    }

    /// Press history, newest first.
    pub fn history(&self) -> impl Iterator<Item = &PressRecord> {
        self.history.iter()
    }

    /// Detects the "forward, then down" motion.
    ///
    /// Scans newest-first for a `down` press followed (further back in time)
    /// by a forward press, where each matched step lies within
    /// [`MOTION_WINDOW_MS`] of the step matched before it. Non-matching
    /// records in between are skipped.
    #[must_use]
    pub fn matches_forward_motion(&self, facing_right: bool) -> bool {
        let steps = [Action::Down, Action::forward(facing_right)];
        let mut step = 0;
        let mut last_at: Option<u64> = None;

        for record in &self.history {
            if record.action != steps[step] {
                continue;
            }
            if let Some(prev) = last_at {
                if prev.abs_diff(record.at_ms) > MOTION_WINDOW_MS {
                    continue;
                }
            }
            step += 1;
            last_at = Some(record.at_ms);
            if step == steps.len() {
                return true;
            }
        }
        false
    }
}

// =============================================================================
// Key maps and routing
// =============================================================================

/// Translation table from physical key codes to actions for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap(BTreeMap<String, Action>);

impl KeyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// WASD movement, F/G attacks, R plane switch.
    #[must_use]
    pub fn player_one() -> Self {
        [
            ("KeyA", Action::Left),
            ("KeyD", Action::Right),
            ("KeyW", Action::Up),
            ("KeyS", Action::Down),
            ("KeyF", Action::Light),
            ("KeyG", Action::Heavy),
            ("KeyR", Action::Plane),
        ]
        .into_iter()
        .collect()
    }

    /// Arrow movement, K/L attacks, P plane switch.
    #[must_use]
    pub fn player_two() -> Self {
        [
            ("ArrowLeft", Action::Left),
            ("ArrowRight", Action::Right),
            ("ArrowUp", Action::Up),
            ("ArrowDown", Action::Down),
            ("KeyK", Action::Light),
            ("KeyL", Action::Heavy),
            ("KeyP", Action::Plane),
        ]
        .into_iter()
        .collect()
    }

    /// Binds `code` to `action`, replacing any previous binding.
    pub fn bind(&mut self, code: impl Into<String>, action: Action) {
        self.0.insert(code.into(), action);
    }

    /// Looks up the action bound to `code`.
    #[must_use]
    pub fn action_for(&self, code: &str) -> Option<Action> {
        self.0.get(code).copied()
    }

    /// Number of bound codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Action)> for KeyMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, Action)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(code, action)| (code.to_owned(), action))
                .collect(),
        )
    }
}

/// A physical key transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Physical key code, e.g. `"KeyA"` or `"ArrowLeft"`.
    pub code: String,
    /// `true` on key-down, `false` on key-up.
    pub pressed: bool,
    /// Event timestamp in milliseconds.
    pub at_ms: u64,
}

impl KeyEvent {
    /// A key-down event.
    #[must_use]
    pub fn down(code: impl Into<String>, at_ms: u64) -> Self {
        Self {
            code: code.into(),
            pressed: true,
            at_ms,
        }
    }

    /// A key-up event.
    #[must_use]
    pub fn up(code: impl Into<String>, at_ms: u64) -> Self {
        Self {
            code: code.into(),
            pressed: false,
            at_ms,
        }
    }
}

/// Fans the shared key stream out to both players' recognizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRouter {
    maps: [KeyMap; 2],
    recognizers: [InputRecognizer; 2],
}

impl InputRouter {
    /// Creates a router from one key map per player.
    #[must_use]
    pub fn new(maps: [KeyMap; 2]) -> Self {
        Self {
            maps,
            recognizers: [InputRecognizer::new(), InputRecognizer::new()],
        }
    }

    /// Offers `event` to both players. Codes missing from a player's map are
    /// ignored for that player.
    pub fn apply(&mut self, event: &KeyEvent) {
        for (map, recognizer) in self.maps.iter().zip(self.recognizers.iter_mut()) {
            let Some(action) = map.action_for(&event.code) else {
                continue;
            };
            if event.pressed {
                recognizer.press(action, event.at_ms);
            } else {
                recognizer.release(action);
            }
        }
    }

    /// The recognizer for `slot`.
    #[must_use]
    pub fn recognizer(&self, slot: PlayerSlot) -> &InputRecognizer {
        &self.recognizers[slot.index()]
    }

    /// Mutable access to the recognizer for `slot`.
    pub fn recognizer_mut(&mut self, slot: PlayerSlot) -> &mut InputRecognizer {
        &mut self.recognizers[slot.index()]
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new([KeyMap::player_one(), KeyMap::player_two()])
    }
}
