//! Fixed timestep physics step
//!
//! Moves the paddles to their commanded positions, integrates the ball and
//! resolves wall, goal and paddle contacts in a fixed, deterministic order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::{Bodies, Body, Player};
use super::collision::{
    CollisionEvent, CollisionKind, ball_goal_contact, ball_paddle_contact, ball_wall_contact,
    reflect_velocity,
};
use crate::consts::*;

/// Which contacts are resolved first when the ball touches a wall and a paddle
/// in the same substep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionOrder {
    /// Side walls and goal lines, then paddles
    #[default]
    WallsFirst,
    /// Paddles, then side walls and goal lines
    PaddlesFirst,
}

/// Physics tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    /// Multiplier applied to the ball velocity on each paddle hit
    pub acceleration_factor: f32,
    pub max_ball_speed: f32,
    /// Distance from a goal line that counts as a goal contact
    pub contact_threshold: f32,
    pub collision_order: CollisionOrder,
    /// Upper bound on ball substeps per call
    pub max_substeps: u32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            acceleration_factor: BALL_ACCELERATION,
            max_ball_speed: BALL_MAX_SPEED,
            contact_threshold: CONTACT_THRESHOLD,
            collision_order: CollisionOrder::WallsFirst,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

/// Commanded left-edge x for each paddle this step (`None` = hold position)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleCommands {
    pub user: Option<f32>,
    pub enemy: Option<f32>,
}

impl PaddleCommands {
    fn get(&self, player: Player) -> Option<f32> {
        match player {
            Player::User => self.user,
            Player::Enemy => self.enemy,
        }
    }
}

/// Paddles are always visited in this order
const PADDLE_ORDER: [Player; 2] = [Player::User, Player::Enemy];

/// Advance all bodies by `dt` and report every contact that happened.
///
/// After the call the ball lies inside the arena and both paddles sit within
/// `[0, width - paddle_width]`. Once a goal is reported the ball is stopped on
/// the line and the rest of the step is skipped.
pub fn physics_step(
    arena: &Arena,
    bodies: &mut Bodies,
    commands: &PaddleCommands,
    dt: f32,
    params: &PhysicsParams,
) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    for player in PADDLE_ORDER {
        move_paddle(arena, bodies.paddle_mut(player), commands.get(player), dt);
    }

    let substeps = substep_count(&bodies.ball, dt, params.max_substeps);
    let sub_dt = dt / substeps as f32;

    for _ in 0..substeps {
        bodies.ball.pos += bodies.ball.vel * sub_dt;

        let scored = match params.collision_order {
            CollisionOrder::WallsFirst => {
                let scored = resolve_boundaries(arena, &mut bodies.ball, params, &mut events);
                if !scored {
                    resolve_paddles(bodies, params, &mut events);
                }
                scored
            }
            CollisionOrder::PaddlesFirst => {
                resolve_paddles(bodies, params, &mut events);
                resolve_boundaries(arena, &mut bodies.ball, params, &mut events)
            }
        };

        arena.clamp_body(&mut bodies.ball);
        if scored {
            break;
        }
    }

    events
}

/// Apply a commanded left edge, clamped to the arena. Non-finite commands are dropped.
fn move_paddle(arena: &Arena, paddle: &mut Body, command: Option<f32>, dt: f32) {
    let before = paddle.left();
    let target = match command {
        Some(x) if x.is_finite() => x,
        Some(x) => {
            log::warn!("Ignoring non-finite paddle command: {}", x);
            before
        }
        None => before,
    };

    let left = arena.clamp_x(target, paddle);
    paddle.set_left(left);
    paddle.vel = if dt > 0.0 {
        Vec2::new((left - before) / dt, 0.0)
    } else {
        Vec2::ZERO
    };
}

/// Enough substeps that the ball moves at most its smallest half-extent per substep
fn substep_count(ball: &Body, dt: f32, max_substeps: u32) -> u32 {
    let travel = ball.speed() * dt;
    let reach = ball.half_extents.min_element().max(f32::EPSILON);
    let needed = (travel / reach).ceil();
    if needed.is_finite() {
        (needed as u32).clamp(1, max_substeps.max(1))
    } else {
        max_substeps.max(1)
    }
}

/// Side walls reflect, goal lines stop the ball. Returns true when a goal was hit.
fn resolve_boundaries(
    arena: &Arena,
    ball: &mut Body,
    params: &PhysicsParams,
    events: &mut Vec<CollisionEvent>,
) -> bool {
    if let Some((side, point)) = ball_wall_contact(ball, arena) {
        let normal = if point.x <= 0.0 { Vec2::X } else { Vec2::NEG_X };
        ball.vel = reflect_velocity(ball.vel, normal);
        arena.clamp_body(ball);
        log::debug!("Ball hit {:?} wall at {}", side, point);
        events.push(CollisionEvent {
            kind: CollisionKind::BallHitWall(side),
            point,
        });
    }

    if let Some((side, point)) = ball_goal_contact(ball, arena, params.contact_threshold) {
        arena.clamp_body(ball);
        ball.vel = Vec2::ZERO;
        log::debug!("Ball hit {:?} goal at {}", side, point);
        events.push(CollisionEvent {
            kind: CollisionKind::BallHitGoal(side),
            point,
        });
        return true;
    }

    false
}

/// Bounce off whichever paddle the ball is heading into, speeding it up
fn resolve_paddles(bodies: &mut Bodies, params: &PhysicsParams, events: &mut Vec<CollisionEvent>) {
    for player in PADDLE_ORDER {
        let paddle = *bodies.paddle(player);
        let ball = &mut bodies.ball;

        let Some(point) = ball_paddle_contact(ball, &paddle) else {
            continue;
        };

        let normal = if ball.pos.y < paddle.pos.y {
            Vec2::NEG_Y
        } else {
            Vec2::Y
        };
        let reflected = reflect_velocity(ball.vel, normal) * params.acceleration_factor;
        ball.vel = reflected.clamp_length_max(params.max_ball_speed);
        ball.pos.y = point.y + normal.y * ball.half_extents.y;

        log::debug!(
            "Ball hit {:?} paddle at {}, speed now {:.1}",
            player,
            point,
            ball.speed()
        );
        events.push(CollisionEvent {
            kind: CollisionKind::BallHitPaddle(player),
            point,
        });
    }
}
