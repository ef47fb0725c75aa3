//! Ball-tracking paddle controller
//!
//! Drives the enemy paddle, and the user paddle in idle/demo mode. It only
//! re-reads the ball position every few ticks and has a top speed, so it can
//! be beaten by a fast enough rally.

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{AI_PADDLE_SPEED, AI_REACTION_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleAi {
    /// Re-sample the ball every N ticks
    pub reaction_ticks: u32,
    /// Top paddle speed (points/s)
    pub max_speed: f32,
    counter: u32,
    target_x: Option<f32>,
}

impl Default for PaddleAi {
    fn default() -> Self {
        Self::new(AI_REACTION_TICKS, AI_PADDLE_SPEED)
    }
}

impl PaddleAi {
    pub fn new(reaction_ticks: u32, max_speed: f32) -> Self {
        Self {
            reaction_ticks: reaction_ticks.max(1),
            max_speed: max_speed.max(0.0),
            counter: 0,
            target_x: None,
        }
    }

    /// Ball centre x the paddle is currently heading for
    pub fn target_x(&self) -> Option<f32> {
        self.target_x
    }

    /// Forget the last sample so the next update re-reads the ball immediately
    pub fn reset(&mut self) {
        self.counter = 0;
        self.target_x = None;
    }

    /// Compute this tick's left-edge command for `paddle`
    pub fn update(&mut self, ball: &Body, paddle: &Body, dt: f32) -> f32 {
        if self.counter % self.reaction_ticks == 0 {
            self.target_x = Some(ball.pos.x);
        }
        self.counter = self.counter.wrapping_add(1);

        let current = paddle.pos.x;
        let target = self.target_x.unwrap_or(current);
        let max_delta = self.max_speed * dt;
        if !(max_delta.is_finite() && max_delta >= 0.0) {
            return paddle.left();
        }
        let center = current + (target - current).clamp(-max_delta, max_delta);

        center - paddle.half_extents.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn paddle_at(x: f32) -> Body {
        Body::new(Vec2::new(x, 50.0), Vec2::new(80.0, 10.0))
    }

    fn ball_at(x: f32) -> Body {
        Body::new(Vec2::new(x, 200.0), Vec2::splat(20.0))
    }

    #[test]
    fn test_moves_toward_ball_at_limited_speed() {
        let mut ai = PaddleAi::new(1, 100.0);
        let paddle = paddle_at(100.0);
        let left = ai.update(&ball_at(200.0), &paddle, 0.1);
        // 10 points of travel, centre 110, left edge 70
        assert!((left - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_stops_on_target() {
        let mut ai = PaddleAi::new(1, 1000.0);
        let paddle = paddle_at(100.0);
        let left = ai.update(&ball_at(105.0), &paddle, 0.1);
        assert!((left - 65.0).abs() < 0.001);
    }

    #[test]
    fn test_reaction_is_rate_limited() {
        let mut ai = PaddleAi::new(3, 1000.0);
        let mut paddle = paddle_at(100.0);

        ai.update(&ball_at(120.0), &paddle, 0.01);
        assert_eq!(ai.target_x(), Some(120.0));

        // ball moves but the AI keeps chasing the stale sample
        for _ in 0..2 {
            let left = ai.update(&ball_at(300.0), &paddle, 0.01);
            paddle.set_left(left);
            assert_eq!(ai.target_x(), Some(120.0));
        }

        ai.update(&ball_at(300.0), &paddle, 0.01);
        assert_eq!(ai.target_x(), Some(300.0));
    }

    #[test]
    fn test_bad_step_holds_position() {
        let paddle = paddle_at(100.0);
        for (speed, dt) in [(100.0, -0.1), (100.0, f32::NAN), (f32::INFINITY, 0.1)] {
            let mut ai = PaddleAi::new(1, 100.0);
            ai.max_speed = speed;
            let left = ai.update(&ball_at(250.0), &paddle, dt);
            assert_eq!(left, paddle.left());
        }
    }

    #[test]
    fn test_reset_resamples_immediately() {
        let mut ai = PaddleAi::new(10, 100.0);
        let paddle = paddle_at(100.0);
        ai.update(&ball_at(50.0), &paddle, 0.01);
        ai.update(&ball_at(250.0), &paddle, 0.01);
        assert_eq!(ai.target_x(), Some(50.0));

        ai.reset();
        ai.update(&ball_at(250.0), &paddle, 0.01);
        assert_eq!(ai.target_x(), Some(250.0));
    }
}
