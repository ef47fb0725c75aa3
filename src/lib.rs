//! Pocket Pong - a single-screen portrait Pong game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `settings`: Data-driven game tuning, loadable from JSON
//! - `feedback`: Sound/haptic cues derived from collision events

pub mod feedback;
pub mod settings;
pub mod sim;

pub use feedback::{Cue, FeedbackMixer, Haptic, HitSound};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (portrait phone screen, in points)
    pub const ARENA_WIDTH: f32 = 375.0;
    pub const ARENA_HEIGHT: f32 = 667.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Gap between a goal line and the paddle's outer edge
    pub const PADDLE_INSET: f32 = 40.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_LAUNCH_SPEED: f32 = 320.0;
    pub const BALL_MAX_SPEED: f32 = 1400.0;
    /// Speed multiplier applied on every paddle hit
    pub const BALL_ACCELERATION: f32 = 1.05;

    /// Distance from a goal line that counts as touching it
    pub const CONTACT_THRESHOLD: f32 = 2.0;

    /// First to this many points wins
    pub const WIN_SCORE: u8 = 5;

    /// Delay between a goal and the next serve (1s stop + 0.5s fade in)
    pub const SERVE_DELAY_SECS: f32 = 1.5;
    /// How long the result is shown before the match resets
    pub const RESULT_DELAY_SECS: f32 = 3.0;

    /// AI re-reads the ball position every N ticks
    pub const AI_REACTION_TICKS: u32 = 6;
    /// AI paddle top speed (points/s)
    pub const AI_PADDLE_SPEED: f32 = 420.0;
}

/// Clamp a value into `[min, max]`, mapping NaN to `min`.
///
/// `f32::clamp` passes NaN through, which would poison positions.
#[inline]
pub fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Unit vector for an angle measured from +x toward +y (screen down)
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(f32::NAN, 0.0, 10.0), 0.0);
        assert_eq!(clamp_finite(f32::INFINITY, 0.0, 10.0), 10.0);
        assert_eq!(clamp_finite(f32::NEG_INFINITY, 0.0, 10.0), 0.0);
        assert_eq!(clamp_finite(4.0, 0.0, 10.0), 4.0);
    }

    #[test]
    fn test_direction_from_angle() {
        let d = direction_from_angle(std::f32::consts::FRAC_PI_2);
        assert!(d.x.abs() < 1e-6);
        assert!((d.y - 1.0).abs() < 1e-6);
    }
}
