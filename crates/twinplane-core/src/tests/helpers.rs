//! Match setup and input scripting for end-to-end tests.

use glam::Vec2;
use proptest::prelude::*;

use crate::fighter::PlayerSlot;
use crate::input::KeyEvent;
use crate::round::INTRO_FRAMES;
use crate::simulation::{FrameOutput, Match};

// =============================================================================
// Match Setup
// =============================================================================

/// A default match stepped through the intro, ready to fight.
pub fn fighting_match() -> Match {
    let mut game = Match::default();
    for _ in 0..INTRO_FRAMES {
        game.step(&[]);
    }
    assert!(game.phase().is_fight());
    game
}

/// A fighting match with both fighters moved to the given x on the ground.
pub fn fighting_match_at(x1: f32, x2: f32) -> Match {
    let mut game = fighting_match();
    let ground = game.config().arena.ground_y();
    game.fighter_mut(PlayerSlot::One)
        .set_position(Vec2::new(x1, ground));
    game.fighter_mut(PlayerSlot::Two)
        .set_position(Vec2::new(x2, ground));
    game
}

/// Steps `frames` frames with no input, returning every output.
pub fn idle(game: &mut Match, frames: u32) -> Vec<FrameOutput> {
    (0..frames).map(|_| game.step(&[])).collect()
}

// =============================================================================
// Scripted Input
// =============================================================================

/// Press then release of `code`, both at `at_ms`, as two frames of input.
pub fn tap(code: &str, at_ms: u64) -> [Vec<KeyEvent>; 2] {
    [vec![KeyEvent::down(code, at_ms)], vec![KeyEvent::up(code, at_ms)]]
}

/// Every key either player has bound by default.
pub const KEY_CODES: [&str; 14] = [
    "KeyA",
    "KeyD",
    "KeyW",
    "KeyS",
    "KeyF",
    "KeyG",
    "KeyR",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "KeyK",
    "KeyL",
    "KeyP",
];

#[allow(clippy::cast_possible_truncation)]
fn key_event(code: &str, pressed: bool, frame: usize) -> KeyEvent {
    let at_ms = frame as u64 * 16;
    if pressed {
        KeyEvent::down(code, at_ms)
    } else {
        KeyEvent::up(code, at_ms)
    }
}

/// Strategy for `frames` frames of input, each holding up to two presses or
/// releases drawn from [`KEY_CODES`], stamped 16ms apart.
pub fn key_stream(frames: usize) -> impl Strategy<Value = Vec<Vec<KeyEvent>>> {
    let frame = prop::collection::vec(
        (prop::sample::select(KEY_CODES.to_vec()), any::<bool>()),
        0..3,
    );
    prop::collection::vec(frame, frames).prop_map(|script| {
        script
            .into_iter()
            .enumerate()
            .map(|(frame, keys)| {
                keys.into_iter()
                    .map(|(code, pressed)| key_event(code, pressed, frame))
                    .collect()
            })
            .collect()
    })
}

/// A fixed pseudo-random key stream for replaying the same match twice.
///
/// Every call with the same `seed` and `frames` yields the same script.
pub fn scripted_input(seed: u64, frames: usize) -> Vec<Vec<KeyEvent>> {
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    (0..frames)
        .map(|frame| {
            let count = next() % 3;
            (0..count)
                .map(|_| {
                    #[allow(clippy::cast_possible_truncation)]
                    let code = KEY_CODES[(next() % KEY_CODES.len() as u64) as usize];
                    key_event(code, next() % 2 == 0, frame)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighting_match_is_past_intro() {
        let game = fighting_match();
        assert_eq!(game.frame(), u64::from(INTRO_FRAMES));
    }

    #[test]
    fn scripted_input_is_repeatable() {
        assert_eq!(scripted_input(7, 50), scripted_input(7, 50));
        assert_ne!(scripted_input(7, 50), scripted_input(8, 50));
    }

    proptest! {
        #[test]
        fn key_stream_stays_on_bound_keys(script in key_stream(30)) {
            prop_assert_eq!(script.len(), 30);
            for (frame, events) in script.iter().enumerate() {
                prop_assert!(events.len() < 3);
                for event in events {
                    prop_assert!(KEY_CODES.contains(&event.code.as_str()));
                    prop_assert_eq!(event.at_ms, frame as u64 * 16);
                }
            }
        }
    }
}
