//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Player;
use super::collision::{CollisionEvent, CollisionKind};
use super::match_state::Phase;
use super::physics::{PaddleCommands, physics_step};
use super::state::GameState;
use super::timer::DeferredAction;

/// Player paddle input for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleInput {
    /// Finger went down: remember where the paddle is
    DragBegan,
    /// Finger moved `translation` points horizontally since the drag began
    DragMoved { translation: f32 },
    /// Absolute position, 0.0 = far left, 1.0 = far right
    Normalized(f32),
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub paddle: Option<PaddleInput>,
    /// Launch ball (tap)
    pub launch: bool,
    /// Abandon the current match and start again from 0 - 0
    pub new_match: bool,
    /// Idle/demo mode - AI plays the user paddle too
    pub idle_mode: bool,
}

/// Match lifecycle changes, for scoreboard and result text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Launched { velocity: Vec2 },
    Scored { scorer: Player, user_score: u8, enemy_score: u8 },
    MatchWon { winner: Player },
    /// Ball is back at the centre, waiting for a launch
    ServeReady,
    /// Scores were cleared
    MatchReset,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    pub collisions: Vec<CollisionEvent>,
    pub events: Vec<MatchEvent>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutput {
    let mut output = TickOutput::default();
    state.time_ticks += 1;

    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring bad timestep {}, holding this tick", dt);
        0.0
    };

    if input.new_match {
        state.start_new_match();
        log::info!("New match started");
        output.events.push(MatchEvent::MatchReset);
    }

    // Deferred serve/reset
    match state.timer.advance(dt) {
        Some(DeferredAction::ServeNextRound) => {
            if state.match_state.serve() {
                state.reset_ball();
                output.events.push(MatchEvent::ServeReady);
            }
        }
        Some(DeferredAction::ResetMatch) => {
            state.match_state.reset();
            state.reset_ball();
            log::info!("Match reset after result display");
            output.events.push(MatchEvent::MatchReset);
        }
        None => {}
    }

    // Paddle commands
    let user = if input.idle_mode {
        Some(
            state
                .user_ai
                .update(&state.bodies.ball, &state.bodies.user_paddle, dt),
        )
    } else {
        input.paddle.and_then(|p| user_paddle_command(state, p))
    };
    let enemy = Some(
        state
            .enemy_ai
            .update(&state.bodies.ball, &state.bodies.enemy_paddle, dt),
    );
    let commands = PaddleCommands { user, enemy };

    // Launch on input (idle mode serves by itself)
    let wants_launch = input.launch || input.idle_mode;
    if wants_launch && state.match_state.phase == Phase::Serving && !state.timer.is_pending() {
        let velocity = state.launch_ball();
        state.match_state.launch();
        log::info!("Ball launched with velocity {}", velocity);
        output.events.push(MatchEvent::Launched { velocity });
    }

    output.collisions = physics_step(
        &state.arena,
        &mut state.bodies,
        &commands,
        dt,
        &state.physics,
    );

    for collision in &output.collisions {
        if let CollisionKind::BallHitGoal(side) = collision.kind {
            let Some(outcome) = state.match_state.record_goal(side) else {
                continue;
            };
            let (user_score, enemy_score) =
                (state.match_state.user_score, state.match_state.enemy_score);
            log::info!(
                "Ball has hit {:?} goal. {:?} scores, now {} - {}",
                side,
                outcome.scorer,
                user_score,
                enemy_score
            );
            output.events.push(MatchEvent::Scored {
                scorer: outcome.scorer,
                user_score,
                enemy_score,
            });

            match outcome.winner {
                Some(winner) => {
                    log::info!("{:?} is the winner", winner);
                    output.events.push(MatchEvent::MatchWon { winner });
                    state
                        .timer
                        .schedule(DeferredAction::ResetMatch, state.result_delay_secs);
                }
                None => state
                    .timer
                    .schedule(DeferredAction::ServeNextRound, state.serve_delay_secs),
            }
        }
    }

    output
}

/// Turn a drag or normalized position into a left-edge command for the user paddle
fn user_paddle_command(state: &mut GameState, input: PaddleInput) -> Option<f32> {
    let paddle = &state.bodies.user_paddle;
    match input {
        PaddleInput::DragBegan => {
            state.drag_origin = paddle.left();
            None
        }
        PaddleInput::DragMoved { translation } => {
            if translation.is_nan() {
                log::warn!("Ignoring NaN drag translation");
                return None;
            }
            Some(state.arena.clamp_x(state.drag_origin + translation, paddle))
        }
        PaddleInput::Normalized(t) => {
            if t.is_nan() {
                log::warn!("Ignoring NaN paddle position");
                return None;
            }
            let travel = state.arena.width() - paddle.size().x;
            Some(state.arena.clamp_x(t * travel, paddle))
        }
    }
}
