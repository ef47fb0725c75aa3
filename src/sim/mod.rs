//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable contact order (walls, goals, then paddles; user before enemy)
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod arena;
pub mod body;
pub mod collision;
pub mod launch;
pub mod match_state;
pub mod physics;
pub mod state;
pub mod tick;
pub mod timer;

pub use ai::PaddleAi;
pub use arena::{Arena, ArenaError};
pub use body::{Bodies, Body, Player};
pub use collision::{Aabb, CollisionEvent, CollisionKind, GoalSide, WallSide};
pub use launch::{LaunchDirection, launch_vector};
pub use match_state::{GoalOutcome, MatchState, Phase};
pub use physics::{CollisionOrder, PaddleCommands, PhysicsParams, physics_step};
pub use state::GameState;
pub use tick::{MatchEvent, PaddleInput, TickInput, TickOutput, tick};
pub use timer::{DeferredAction, OneShotTimer};
