//! Headless transcript runner.
//!
//! Feeds a recorded key-event transcript through a [`Match`] and prints a
//! JSON summary of the outcome.
//!
//! Usage:
//!   twinplane-replay [transcript.json] [--verbose]
//!
//! Reads stdin when no path is given. A transcript looks like:
//!
//! ```json
//! { "config": null, "frames": [[{ "code": "KeyF", "pressed": true, "at_ms": 0 }], []] }
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Level};

use twinplane_core::events::FrameEvent;
use twinplane_core::input::KeyEvent;
use twinplane_core::round::MatchPhase;
use twinplane_core::{FightConfig, Match, PlayerSlot};

/// A recorded session: optional configuration plus one event list per frame.
#[derive(Debug, Deserialize)]
struct Transcript {
    #[serde(default)]
    config: Option<FightConfig>,
    frames: Vec<Vec<KeyEvent>>,
}

/// What the run produced.
#[derive(Debug, Default, PartialEq, Serialize)]
struct Summary {
    frames: u64,
    round: u32,
    phase: Option<MatchPhase>,
    health: [u32; 2],
    hits: [u32; 2],
    knockouts: Vec<PlayerSlot>,
    projectiles_thrown: u32,
}

impl Summary {
    fn record(&mut self, event: &FrameEvent) {
        match event {
            FrameEvent::Hit { attacker, .. } => self.hits[attacker.index()] += 1,
            FrameEvent::KnockOut { loser } => self.knockouts.push(*loser),
            FrameEvent::ProjectileSpawned { .. } => self.projectiles_thrown += 1,
            _ => {}
        }
    }

    fn finish(mut self, game: &Match) -> Self {
        self.frames = game.frame();
        self.round = game.round().round();
        self.phase = Some(game.phase());
        for fighter in game.fighters() {
            self.health[fighter.slot().index()] = fighter.health();
        }
        self
    }
}

fn load_transcript(path: Option<&str>) -> Result<Transcript> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read transcript from stdin")?;
            buf
        }
    };
    parse_transcript(&json)
}

fn parse_transcript(json: &str) -> Result<Transcript> {
    let transcript: Transcript =
        serde_json::from_str(json).context("failed to parse transcript JSON")?;
    if let Some(config) = &transcript.config {
        config.validate().context("invalid fight configuration")?;
    }
    Ok(transcript)
}

fn run(transcript: Transcript) -> Summary {
    let mut game = Match::new(transcript.config.unwrap_or_default());
    let mut summary = Summary::default();

    for input in &transcript.frames {
        let output = game.step(input);
        for event in &output.events {
            match event {
                FrameEvent::RoundStarted { round } => {
                    info!(frame = output.frame, round, "round started");
                }
                FrameEvent::RoundOver { round } => {
                    info!(frame = output.frame, round, "round over");
                }
                other => debug!(frame = output.frame, event = ?other),
            }
            summary.record(event);
        }
    }

    summary.finish(&game)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let transcript = load_transcript(path)?;
    info!(frames = transcript.frames.len(), "replaying transcript");

    let summary = run(transcript);
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to encode summary")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinplane_core::round::INTRO_FRAMES;

    fn frames_json(frames: &[Vec<KeyEvent>]) -> String {
        serde_json::json!({ "frames": frames }).to_string()
    }

    #[test]
    fn config_is_optional() {
        let transcript = parse_transcript(r#"{ "frames": [[], []] }"#).unwrap();
        assert!(transcript.config.is_none());
        assert_eq!(transcript.frames.len(), 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = serde_json::to_value(FightConfig::default()).unwrap();
        config["arena"]["width"] = serde_json::json!(-1.0);
        let json = serde_json::json!({ "config": config, "frames": [] }).to_string();
        assert!(parse_transcript(&json).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_transcript("{ frames: ").is_err());
    }

    #[test]
    fn idle_transcript_reaches_fight() {
        let frames = vec![Vec::new(); INTRO_FRAMES as usize + 1];
        let summary = run(parse_transcript(&frames_json(&frames)).unwrap());

        assert_eq!(summary.frames, u64::from(INTRO_FRAMES) + 1);
        assert_eq!(summary.round, 1);
        assert_eq!(summary.phase, Some(MatchPhase::Fight));
        assert_eq!(summary.health, [100, 100]);
        assert_eq!(summary.hits, [0, 0]);
        assert!(summary.knockouts.is_empty());
    }

    #[test]
    fn projectile_throw_is_counted() {
        let mut frames = vec![Vec::new(); INTRO_FRAMES as usize];
        frames.push(vec![KeyEvent::down("KeyD", 0)]);
        frames.push(vec![KeyEvent::up("KeyD", 0), KeyEvent::down("KeyS", 50)]);
        frames.push(vec![KeyEvent::up("KeyS", 50), KeyEvent::down("KeyF", 90)]);

        let summary = run(parse_transcript(&frames_json(&frames)).unwrap());
        assert_eq!(summary.projectiles_thrown, 1);
    }
}
