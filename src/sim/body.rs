//! Moving bodies: the ball and the two paddles
//!
//! Every body is an axis-aligned box described by its centre and half-extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Which side of the table a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Human player, bottom of the screen
    User,
    /// AI opponent, top of the screen
    Enemy,
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::User => Player::Enemy,
            Player::Enemy => Player::User,
        }
    }
}

/// A positioned, possibly moving box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre position
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_extents: size * 0.5,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half_extents.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_extents.y
    }

    /// Move the body so its left edge sits at `x`
    #[inline]
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.half_extents.x;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.pos, self.half_extents)
    }

    /// Put the body at `pos` and bring it to rest
    pub fn place_at_rest(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

/// The full set of bodies in play. Created once per game and repositioned between rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bodies {
    pub ball: Body,
    pub user_paddle: Body,
    pub enemy_paddle: Body,
}

impl Bodies {
    pub fn paddle(&self, player: Player) -> &Body {
        match player {
            Player::User => &self.user_paddle,
            Player::Enemy => &self.enemy_paddle,
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Body {
        match player {
            Player::User => &mut self.user_paddle,
            Player::Enemy => &mut self.enemy_paddle,
        }
    }
}
