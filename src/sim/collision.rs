//! Collision detection for axis-aligned boxes
//!
//! Pure geometry: these functions only report contacts. Resolution (reflection,
//! push-out, speed-up) lives in `physics`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::{Body, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Overlap test. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Left or right side wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Top or bottom goal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSide {
    /// Enemy's goal (y = 0)
    Top,
    /// User's goal (y = height)
    Bottom,
}

impl GoalSide {
    /// The player who scores when the ball reaches this line
    pub fn scorer(self) -> Player {
        match self {
            GoalSide::Top => Player::User,
            GoalSide::Bottom => Player::Enemy,
        }
    }
}

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    BallHitPaddle(Player),
    BallHitWall(WallSide),
    BallHitGoal(GoalSide),
}

/// A contact reported by the physics step, for scoring and host feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    /// Contact point in arena coordinates
    pub point: Vec2,
}

/// Check the ball against the side walls.
///
/// Only reports a contact when the ball overlaps a wall *and* is moving into it,
/// so a ball that was already pushed out is not reported twice.
pub fn ball_wall_contact(ball: &Body, arena: &Arena) -> Option<(WallSide, Vec2)> {
    if ball.left() <= 0.0 && ball.vel.x < 0.0 {
        Some((WallSide::Left, Vec2::new(0.0, ball.pos.y)))
    } else if ball.right() >= arena.width() && ball.vel.x > 0.0 {
        Some((WallSide::Right, Vec2::new(arena.width(), ball.pos.y)))
    } else {
        None
    }
}

/// Check the ball against the goal lines.
///
/// A ball whose edge is within `threshold` of a goal line (or past it) while
/// travelling toward that line counts as a goal. A ball at rest never scores.
pub fn ball_goal_contact(ball: &Body, arena: &Arena, threshold: f32) -> Option<(GoalSide, Vec2)> {
    if ball.top() - arena.top_goal_y() <= threshold && ball.vel.y < 0.0 {
        Some((GoalSide::Top, Vec2::new(ball.pos.x, arena.top_goal_y())))
    } else if arena.bottom_goal_y() - ball.bottom() <= threshold && ball.vel.y > 0.0 {
        Some((GoalSide::Bottom, Vec2::new(ball.pos.x, arena.bottom_goal_y())))
    } else {
        None
    }
}

/// Check the ball against a paddle.
///
/// Returns the contact point on the paddle face the ball approaches from.
/// A ball moving away from the paddle's centre line is ignored so it can't get stuck.
pub fn ball_paddle_contact(ball: &Body, paddle: &Body) -> Option<Vec2> {
    if !ball.aabb().intersects(&paddle.aabb()) {
        return None;
    }

    let toward = (paddle.pos.y - ball.pos.y) * ball.vel.y > 0.0;
    if !toward {
        return None;
    }

    let face_y = if ball.pos.y < paddle.pos.y {
        paddle.top()
    } else {
        paddle.bottom()
    };
    let x = ball.pos.x.clamp(paddle.left(), paddle.right());
    Some(Vec2::new(x, face_y))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(300.0, 500.0).unwrap()
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Body {
        let mut ball = Body::new(Vec2::new(x, y), Vec2::splat(20.0));
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::new(Vec2::splat(5.0), Vec2::splat(15.0));
        let c = Aabb::new(Vec2::splat(11.0), Vec2::splat(20.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
        assert!(a.contains(Vec2::splat(10.0)));
    }

    #[test]
    fn test_wall_contact_only_when_moving_in() {
        let arena = arena();
        let ball = ball_at(9.0, 250.0, Vec2::new(-100.0, 0.0));
        assert_eq!(
            ball_wall_contact(&ball, &arena),
            Some((WallSide::Left, Vec2::new(0.0, 250.0)))
        );

        let leaving = ball_at(9.0, 250.0, Vec2::new(100.0, 0.0));
        assert_eq!(ball_wall_contact(&leaving, &arena), None);

        let right = ball_at(295.0, 100.0, Vec2::new(50.0, 10.0));
        assert_eq!(
            ball_wall_contact(&right, &arena).map(|(side, _)| side),
            Some(WallSide::Right)
        );
    }

    #[test]
    fn test_goal_contact_within_threshold() {
        let arena = arena();
        // top edge at y = 1.0, within 2px of the line
        let ball = ball_at(150.0, 11.0, Vec2::new(0.0, -200.0));
        assert_eq!(
            ball_goal_contact(&ball, &arena, 2.0),
            Some((GoalSide::Top, Vec2::new(150.0, 0.0)))
        );

        // top edge at y = 3.0, outside the threshold
        let ball = ball_at(150.0, 13.0, Vec2::new(0.0, -200.0));
        assert_eq!(ball_goal_contact(&ball, &arena, 2.0), None);

        // past the line still counts
        let ball = ball_at(150.0, 495.0, Vec2::new(0.0, 200.0));
        assert_eq!(
            ball_goal_contact(&ball, &arena, 2.0).map(|(side, _)| side),
            Some(GoalSide::Bottom)
        );
    }

    #[test]
    fn test_resting_ball_never_scores() {
        let arena = arena();
        let ball = ball_at(150.0, 10.0, Vec2::ZERO);
        assert_eq!(ball_goal_contact(&ball, &arena, 2.0), None);
    }

    #[test]
    fn test_paddle_contact_faces() {
        let paddle = Body::new(Vec2::new(150.0, 450.0), Vec2::new(80.0, 10.0));
        let falling = ball_at(160.0, 437.0, Vec2::new(0.0, 100.0));
        assert_eq!(
            ball_paddle_contact(&falling, &paddle),
            Some(Vec2::new(160.0, 445.0))
        );

        let rising = ball_at(160.0, 437.0, Vec2::new(0.0, -100.0));
        assert_eq!(ball_paddle_contact(&rising, &paddle), None);

        let clear = ball_at(160.0, 400.0, Vec2::new(0.0, 100.0));
        assert_eq!(ball_paddle_contact(&clear, &paddle), None);
    }

    #[test]
    fn test_goal_side_scorer() {
        assert_eq!(GoalSide::Top.scorer(), Player::User);
        assert_eq!(GoalSide::Bottom.scorer(), Player::Enemy);
    }

    #[test]
    fn test_reflect_velocity() {
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }
}
