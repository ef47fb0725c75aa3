//! The rectangular play field
//!
//! Screen coordinates: origin at the top-left corner, +y pointing down.
//! The top edge (y = 0) is the enemy's goal line, the bottom edge (y = height)
//! is the user's goal line, and the left/right edges are solid walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::clamp_finite;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Errors raised when building an [`Arena`]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("arena dimensions must be positive and finite - got {width} x {height}")]
    InvalidDimensions { width: f32, height: f32 },
}

/// Fixed-size play field. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ArenaError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// y coordinate of the enemy's goal line
    #[inline]
    pub fn top_goal_y(&self) -> f32 {
        0.0
    }

    /// y coordinate of the user's goal line
    #[inline]
    pub fn bottom_goal_y(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive point-in-rectangle test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Whether the whole body lies inside the field
    pub fn contains_body(&self, body: &Body) -> bool {
        body.left() >= 0.0
            && body.right() <= self.width
            && body.top() >= 0.0
            && body.bottom() <= self.height
    }

    /// Clamp a paddle's left edge to `[0, width - paddle_width]`.
    ///
    /// A paddle wider than the arena is pinned to 0. NaN maps to 0.
    pub fn clamp_x(&self, left: f32, paddle: &Body) -> f32 {
        let max_x = (self.width - paddle.size().x).max(0.0);
        clamp_finite(left, 0.0, max_x)
    }

    /// Pull a body completely inside the field
    pub fn clamp_body(&self, body: &mut Body) {
        let half = body.half_extents;
        let max = Vec2::new(self.width, self.height) - half;
        body.pos.x = clamp_finite(body.pos.x, half.x, max.x.max(half.x));
        body.pos.y = clamp_finite(body.pos.y, half.y, max.y.max(half.y));
    }
}
