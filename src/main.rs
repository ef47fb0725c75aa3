//! Pocket Pong headless runner
//!
//! Plays AI-vs-AI matches through the same fixed-timestep loop a host app
//! would drive, logging match events and printing a JSON summary at the end.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use pocket_pong::consts::SIM_DT;
use pocket_pong::sim::{GameState, MatchEvent, MatchState, Player, TickInput, tick};
use pocket_pong::{FeedbackMixer, Settings};

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Seed for the serve RNG. A random one is picked when omitted.
    #[arg(long, short)]
    seed: Option<u64>,

    /// Stop after this many simulation ticks (120 per second).
    #[arg(long, short, default_value = "72000")]
    ticks: u64,

    /// Stop once this many matches have been won.
    #[arg(long, short, default_value = "1")]
    matches: u32,

    /// JSON settings file. Missing fields take their defaults.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct Wins {
    user: u32,
    enemy: u32,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    seconds: f32,
    wins: Wins,
    /// Cues the host would have played
    cues: usize,
    final_state: MatchState,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut state = match GameState::with_settings(&settings, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Pocket Pong (headless) starting...");

    let summary = run(&mut state, &settings, &cli);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Could not serialize run summary : {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(state: &mut GameState, settings: &Settings, cli: &Cli) -> RunSummary {
    let mixer = FeedbackMixer::from_settings(settings);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut wins = Wins::default();
    let mut cues = 0;

    while state.time_ticks < cli.ticks && wins.user + wins.enemy < cli.matches {
        let output = tick(state, &input, SIM_DT);

        for collision in &output.collisions {
            if let Some(cue) = mixer.cue(collision) {
                log::trace!("{:?} -> {:?}", collision.kind, cue);
                cues += 1;
            }
        }

        for event in &output.events {
            match event {
                MatchEvent::MatchWon { winner } => match winner {
                    Player::User => wins.user += 1,
                    Player::Enemy => wins.enemy += 1,
                },
                MatchEvent::Scored { scorer, .. } => log::info!(
                    "{:?} scores ({} of {})",
                    scorer,
                    state.match_state.score(*scorer),
                    state.match_state.win_score
                ),
                _ => log::debug!("{:?}", event),
            }
        }
    }

    if wins.user + wins.enemy < cli.matches {
        log::warn!(
            "Tick limit {} reached after {} of {} matches",
            cli.ticks,
            wins.user + wins.enemy,
            cli.matches
        );
    }

    RunSummary {
        seed: state.seed,
        ticks: state.time_ticks,
        seconds: state.time_ticks as f32 * SIM_DT,
        wins,
        cues,
        final_state: state.match_state.clone(),
    }
}
