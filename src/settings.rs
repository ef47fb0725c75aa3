//! Game tuning and preferences
//!
//! Every field has a default, so a settings file only needs the values it
//! changes. Stored as JSON.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, ArenaError, CollisionOrder, PhysicsParams};

/// Errors raised while loading or validating [`Settings`]
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("could not access settings file `{path}` : {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings are not valid JSON : {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid arena : {0}")]
    Arena(#[from] ArenaError),

    #[error("invalid setting `{field}` : {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena & bodies ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each goal line and its paddle
    pub paddle_inset: f32,
    pub ball_size: f32,

    // === Physics ===
    /// Serve speed (points/s)
    pub launch_speed: f32,
    /// Velocity multiplier per paddle hit (must be >= 1)
    pub acceleration_factor: f32,
    pub max_ball_speed: f32,
    /// How close to a goal line counts as touching it
    pub contact_threshold: f32,
    /// Tie-break when the ball touches a wall and a paddle in one step
    pub collision_order: CollisionOrder,

    // === Match ===
    pub win_score: u8,
    /// Pause after a goal before the ball is served again
    pub serve_delay_secs: f32,
    /// How long the win/lose result stays up before the match resets
    pub result_delay_secs: f32,

    // === AI ===
    pub ai_reaction_ticks: u32,
    pub ai_paddle_speed: f32,

    // === Audio & haptics ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    pub haptics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            ball_size: BALL_SIZE,

            launch_speed: BALL_LAUNCH_SPEED,
            acceleration_factor: BALL_ACCELERATION,
            max_ball_speed: BALL_MAX_SPEED,
            contact_threshold: CONTACT_THRESHOLD,
            collision_order: CollisionOrder::WallsFirst,

            win_score: WIN_SCORE,
            serve_delay_secs: SERVE_DELAY_SECS,
            result_delay_secs: RESULT_DELAY_SECS,

            ai_reaction_ticks: AI_REACTION_TICKS,
            ai_paddle_speed: AI_PADDLE_SPEED,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            haptics: true,
        }
    }
}

fn ensure(field: &'static str, ok: bool, reason: impl Into<String>) -> Result<(), SettingsError> {
    if ok {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: reason.into(),
        })
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn unit(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Check every field, and that the paddles and ball fit in the arena
    pub fn validate(&self) -> Result<(), SettingsError> {
        let arena = self.arena()?;

        ensure(
            "paddle_width",
            positive(self.paddle_width) && self.paddle_width <= arena.width(),
            format!("must be in (0, {}] - got {}", arena.width(), self.paddle_width),
        )?;
        ensure(
            "paddle_height",
            positive(self.paddle_height),
            format!("must be positive - got {}", self.paddle_height),
        )?;
        ensure(
            "paddle_inset",
            non_negative(self.paddle_inset),
            format!("must not be negative - got {}", self.paddle_inset),
        )?;
        ensure(
            "ball_size",
            positive(self.ball_size) && self.ball_size < arena.width(),
            format!("must be in (0, {}) - got {}", arena.width(), self.ball_size),
        )?;
        let needed = 2.0 * (self.paddle_inset + self.paddle_height) + self.ball_size;
        ensure(
            "arena_height",
            needed < arena.height(),
            format!("paddles and ball need more than {} - got {}", needed, arena.height()),
        )?;

        ensure(
            "launch_speed",
            positive(self.launch_speed),
            format!("must be positive - got {}", self.launch_speed),
        )?;
        ensure(
            "acceleration_factor",
            self.acceleration_factor.is_finite() && self.acceleration_factor >= 1.0,
            format!("must be at least 1 - got {}", self.acceleration_factor),
        )?;
        ensure(
            "max_ball_speed",
            self.max_ball_speed.is_finite() && self.max_ball_speed >= self.launch_speed,
            format!(
                "must be finite and at least launch_speed ({}) - got {}",
                self.launch_speed, self.max_ball_speed
            ),
        )?;
        let max_tunnel_free = self.max_tunnel_free_speed();
        ensure(
            "max_ball_speed",
            self.max_ball_speed <= max_tunnel_free,
            format!(
                "ball would pass through paddles above {} - got {}",
                max_tunnel_free, self.max_ball_speed
            ),
        )?;
        ensure(
            "contact_threshold",
            non_negative(self.contact_threshold),
            format!("must not be negative - got {}", self.contact_threshold),
        )?;

        ensure("win_score", self.win_score >= 1, "must be at least 1")?;
        ensure(
            "serve_delay_secs",
            non_negative(self.serve_delay_secs),
            format!("must not be negative - got {}", self.serve_delay_secs),
        )?;
        ensure(
            "result_delay_secs",
            non_negative(self.result_delay_secs),
            format!("must not be negative - got {}", self.result_delay_secs),
        )?;

        ensure(
            "ai_reaction_ticks",
            self.ai_reaction_ticks >= 1,
            "must be at least 1",
        )?;
        ensure(
            "ai_paddle_speed",
            non_negative(self.ai_paddle_speed),
            format!("must not be negative - got {}", self.ai_paddle_speed),
        )?;

        ensure(
            "master_volume",
            unit(self.master_volume),
            format!("must be in [0, 1] - got {}", self.master_volume),
        )?;
        ensure(
            "sfx_volume",
            unit(self.sfx_volume),
            format!("must be in [0, 1] - got {}", self.sfx_volume),
        )?;

        Ok(())
    }

    /// Fastest ball that still overlaps a paddle on some substep.
    ///
    /// Per substep the ball may travel at most half its size plus half the paddle height.
    pub fn max_tunnel_free_speed(&self) -> f32 {
        (self.ball_size + self.paddle_height) / 2.0 * MAX_SUBSTEPS as f32 / SIM_DT
    }

    pub fn arena(&self) -> Result<Arena, ArenaError> {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    pub fn physics_params(&self) -> PhysicsParams {
        PhysicsParams {
            acceleration_factor: self.acceleration_factor,
            max_ball_speed: self.max_ball_speed,
            contact_threshold: self.contact_threshold,
            collision_order: self.collision_order,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}
