//! Game state and round reset
//!
//! Everything the game loop mutates lives here, owned by a single `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ai::PaddleAi;
use super::arena::Arena;
use super::body::{Bodies, Body, Player};
use super::launch::launch_vector;
use super::match_state::MatchState;
use super::physics::PhysicsParams;
use super::timer::OneShotTimer;
use crate::settings::{Settings, SettingsError};

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub bodies: Bodies,
    pub match_state: MatchState,
    pub physics: PhysicsParams,
    /// Pending serve/reset
    pub timer: OneShotTimer,
    pub enemy_ai: PaddleAi,
    /// Drives the user paddle in idle mode
    pub user_ai: PaddleAi,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub launch_speed: f32,
    pub serve_delay_secs: f32,
    pub result_delay_secs: f32,
    /// User paddle left edge when the current drag began
    pub(crate) drag_origin: f32,
    rng: Pcg32,
}

impl GameState {
    /// Create a game with default settings
    pub fn new(seed: u64) -> Self {
        let settings = Settings::default();
        Self::build(&settings, Arena::default(), seed)
    }

    /// Create a game from validated settings
    pub fn with_settings(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let arena = settings.arena()?;
        Ok(Self::build(settings, arena, seed))
    }

    fn build(settings: &Settings, arena: Arena, seed: u64) -> Self {
        let paddle_size = settings.paddle_size();
        let center = arena.center();
        let paddle_offset = settings.paddle_inset + settings.paddle_height / 2.0;

        let bodies = Bodies {
            ball: Body::new(center, settings.ball_extent()),
            user_paddle: Body::new(
                Vec2::new(center.x, arena.bottom_goal_y() - paddle_offset),
                paddle_size,
            ),
            enemy_paddle: Body::new(
                Vec2::new(center.x, arena.top_goal_y() + paddle_offset),
                paddle_size,
            ),
        };
        let drag_origin = bodies.user_paddle.left();

        log::info!("Game initialized with seed: {}", seed);

        Self {
            seed,
            arena,
            bodies,
            match_state: MatchState::new(settings.win_score),
            physics: settings.physics_params(),
            timer: OneShotTimer::new(),
            enemy_ai: PaddleAi::new(settings.ai_reaction_ticks, settings.ai_paddle_speed),
            user_ai: PaddleAi::new(settings.ai_reaction_ticks, settings.ai_paddle_speed),
            time_ticks: 0,
            launch_speed: settings.launch_speed,
            serve_delay_secs: settings.serve_delay_secs,
            result_delay_secs: settings.result_delay_secs,
            drag_origin,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Stop the ball at the centre and bring the user paddle back to the middle
    pub fn reset_ball(&mut self) {
        let center = self.arena.center();
        self.bodies.ball.place_at_rest(center);

        let paddle = &mut self.bodies.user_paddle;
        paddle.place_at_rest(Vec2::new(center.x, paddle.pos.y));
        self.drag_origin = paddle.left();

        self.enemy_ai.reset();
        self.user_ai.reset();
    }

    /// Give the resting ball its serve velocity
    pub fn launch_ball(&mut self) -> Vec2 {
        let velocity = launch_vector(&mut self.rng, self.launch_speed);
        self.bodies.ball.vel = velocity;
        velocity
    }

    /// Drop any pending serve/reset and start from 0 - 0
    pub fn start_new_match(&mut self) {
        if let Some(action) = self.timer.cancel() {
            log::debug!("Cancelled pending {:?} for new match", action);
        }
        self.match_state.reset();
        self.reset_ball();
    }

    pub fn paddle(&self, player: Player) -> &Body {
        self.bodies.paddle(player)
    }
}
