//! Full-frame tests: key events in, fight outcomes out.

use proptest::prelude::*;

use crate::events::{EventLog, FrameEvent, HitSource};
use crate::fighter::{AttackKind, HitInfo, Plane, PlayerSlot, Pose};
use crate::input::KeyEvent;
use crate::render::{build_draw_list, DrawCommand, NoSheets, HIGHLIGHT};
use crate::round::{MatchPhase, ROUND_OVER_FRAMES};

use super::helpers::{fighting_match, fighting_match_at, idle, key_stream, tap};

fn knock_out(game: &mut crate::simulation::Match, slot: PlayerSlot) {
    let hit = HitInfo {
        damage: 100,
        stun: 0,
        knockback: 0,
        priority: 0,
        source_x: 0.0,
    };
    game.fighter_mut(slot)
        .take_hit(&hit, false, &mut EventLog::new());
}

// =============================================================================
// Melee
// =============================================================================

#[test]
fn light_attack_lands_end_to_end() {
    let mut game = fighting_match_at(300.0, 350.0);

    let out = game.step(&[KeyEvent::down("KeyF", 1000)]);

    let rival = game.fighter(PlayerSlot::Two);
    assert_eq!(rival.health(), 94);
    assert_eq!(rival.action_lock(), 8);
    assert_eq!(rival.pose(), Pose::Hit);
    assert!(out.events.iter().any(|e| matches!(
        e,
        FrameEvent::Hit {
            attacker: PlayerSlot::One,
            defender: PlayerSlot::Two,
            damage: 6,
            source: HitSource::Melee,
            ..
        }
    )));
    assert_eq!(game.hud().health_bar_width(PlayerSlot::Two), "94%");
}

#[test]
fn rival_heavy_down_lands_powered_heavy() {
    let mut game = fighting_match_at(300.0, 350.0);

    let out = game.step(&[
        KeyEvent::down("ArrowDown", 1000),
        KeyEvent::down("KeyL", 1000),
    ]);

    assert_eq!(game.fighter(PlayerSlot::One).health(), 86);
    assert!(out.events.iter().any(|e| matches!(
        e,
        FrameEvent::Hit {
            attacker: PlayerSlot::Two,
            damage: 14,
            ..
        }
    )));
}

#[test]
fn melee_ignores_other_plane() {
    let mut game = fighting_match_at(300.0, 350.0);
    game.fighter_mut(PlayerSlot::Two).set_plane(Plane::Back);

    game.step(&[KeyEvent::down("KeyF", 1000)]);

    assert_eq!(game.fighter(PlayerSlot::Two).health(), 100);
    assert_eq!(
        game.fighter(PlayerSlot::One).attack().map(|a| a.kind),
        Some(AttackKind::Light)
    );
}

#[test]
fn an_attack_hits_only_once() {
    let mut game = fighting_match_at(300.0, 350.0);
    let [press, release] = tap("KeyF", 1000);

    game.step(&press);
    game.step(&release);
    idle(&mut game, 30);

    assert_eq!(game.fighter(PlayerSlot::Two).health(), 94);
}

#[test]
fn guarding_turns_heavy_into_chip() {
    let mut game = fighting_match_at(300.0, 350.0);

    game.step(&[
        KeyEvent::down("KeyG", 1000),
        KeyEvent::down("ArrowRight", 1000),
    ]);

    let rival = game.fighter(PlayerSlot::Two);
    assert!(rival.is_guarding());
    assert_eq!(rival.health(), 98);
    assert_eq!(rival.pose(), Pose::Guard);
}

// =============================================================================
// Specials and planes
// =============================================================================

#[test]
fn forward_down_light_throws_a_projectile_that_lands() {
    let mut game = fighting_match_at(300.0, 600.0);

    game.step(&[KeyEvent::down("KeyD", 0)]);
    game.step(&[KeyEvent::up("KeyD", 0), KeyEvent::down("KeyS", 80)]);
    let thrown = game.step(&[KeyEvent::up("KeyS", 80), KeyEvent::down("KeyF", 120)]);
    game.step(&[KeyEvent::up("KeyF", 140)]);

    assert!(thrown
        .events
        .iter()
        .any(|e| matches!(e, FrameEvent::ProjectileSpawned { owner: PlayerSlot::One })));
    assert_eq!(game.projectiles().len(), 1);
    assert!(build_draw_list(&game, &NoSheets).iter().any(|c| matches!(
        c,
        DrawCommand::FillRect { color, alpha, .. } if *color == HIGHLIGHT && (*alpha - 1.0).abs() < f32::EPSILON
    )));

    let outputs = idle(&mut game, 60);

    assert_eq!(game.fighter(PlayerSlot::Two).health(), 90);
    assert!(game.projectiles().is_empty());
    assert!(outputs.iter().flat_map(|o| &o.events).any(|e| matches!(
        e,
        FrameEvent::Hit {
            source: HitSource::Projectile,
            damage: 10,
            ..
        }
    )));
}

#[test]
fn plane_key_switches_and_announces() {
    let mut game = fighting_match();

    let out = game.step(&[KeyEvent::down("KeyP", 1000)]);

    assert_eq!(game.fighter(PlayerSlot::Two).plane(), Plane::Back);
    assert!(out.events.iter().any(|e| matches!(
        e,
        FrameEvent::PlaneSwitched {
            slot: PlayerSlot::Two,
            plane: Plane::Back
        }
    )));
    assert_eq!(game.hud().announcement().unwrap().text, "BACK");
}

#[test]
fn holding_plane_key_respects_cooldown() {
    let mut game = fighting_match();
    game.step(&[KeyEvent::down("KeyR", 1000)]);
    let outputs = idle(&mut game, 12);
    let switches = outputs
        .iter()
        .flat_map(|o| &o.events)
        .filter(|e| matches!(e, FrameEvent::PlaneSwitched { .. }))
        .count();
    assert_eq!(switches, 0);

    let out = game.step(&[]);
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, FrameEvent::PlaneSwitched { plane: Plane::Front, .. })));
}

// =============================================================================
// Rounds
// =============================================================================

#[test]
fn knock_out_leads_to_next_round() {
    let mut game = fighting_match();
    knock_out(&mut game, PlayerSlot::Two);

    let out = game.step(&[]);
    assert_eq!(
        out.phase,
        MatchPhase::RoundOver {
            remaining: ROUND_OVER_FRAMES
        }
    );
    assert_eq!(game.hud().health_bar_width(PlayerSlot::Two), "0%");

    let outputs = idle(&mut game, ROUND_OVER_FRAMES);
    let last = outputs.last().unwrap();
    assert!(last
        .events
        .iter()
        .any(|e| matches!(e, FrameEvent::RoundStarted { round: 2 })));
    assert!(game.phase().is_fight());
    assert_eq!(game.round().round(), 2);
    assert_eq!(game.hud().round_label(), "ROUND 2");
    assert_eq!(game.hud().health_bar_width(PlayerSlot::Two), "100%");
    assert_eq!(game.hud().announcement().unwrap().text, "READY?");
}

#[test]
fn fighters_are_frozen_after_knock_out() {
    let mut game = fighting_match_at(300.0, 350.0);
    knock_out(&mut game, PlayerSlot::Two);
    game.step(&[]);

    let before = game.fighters().clone();
    idle(&mut game, 10);
    game.step(&[KeyEvent::down("KeyD", 2000)]);
    assert_eq!(game.fighters(), &before);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn health_stays_in_range_under_random_input(script in key_stream(600)) {
        let mut game = fighting_match_at(300.0, 380.0);
        for events in &script {
            game.step(events);
            for fighter in game.fighters() {
                prop_assert!(fighter.health() <= 100);
                if fighter.is_dead() {
                    prop_assert_eq!(fighter.health(), 0);
                }
            }
        }
    }
}
