//! Serve vector generation
//!
//! A serve leaves the centre at a random steepness between ~29° and ~58°
//! from the horizontal, in one of four mirrored directions.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::direction_from_angle;

/// Shallowest launch angle (π·0.16, 28.8°)
pub const LAUNCH_ANGLE_MIN: f32 = PI * 0.16;
/// Steepest launch angle (π·0.32, 57.6°)
pub const LAUNCH_ANGLE_MAX: f32 = PI * 0.32;

/// The four mirrored launch directions (screen y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchDirection {
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

impl LaunchDirection {
    pub const ALL: [LaunchDirection; 4] = [
        LaunchDirection::RightDown,
        LaunchDirection::RightUp,
        LaunchDirection::LeftDown,
        LaunchDirection::LeftUp,
    ];

    /// Sign of (x, y) for this direction
    pub fn signs(self) -> Vec2 {
        match self {
            LaunchDirection::RightDown => Vec2::new(1.0, 1.0),
            LaunchDirection::RightUp => Vec2::new(1.0, -1.0),
            LaunchDirection::LeftDown => Vec2::new(-1.0, 1.0),
            LaunchDirection::LeftUp => Vec2::new(-1.0, -1.0),
        }
    }
}

impl Distribution<LaunchDirection> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LaunchDirection {
        LaunchDirection::ALL[rng.random_range(0..LaunchDirection::ALL.len())]
    }
}

/// Draw a launch angle in `[LAUNCH_ANGLE_MIN, LAUNCH_ANGLE_MAX)`
pub fn random_launch_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let t: f32 = rng.random();
    LAUNCH_ANGLE_MIN + (LAUNCH_ANGLE_MAX - LAUNCH_ANGLE_MIN) * t
}

/// Build a launch velocity of magnitude `amplitude` with random steepness and direction
pub fn launch_vector<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> Vec2 {
    let angle = random_launch_angle(rng);
    let direction: LaunchDirection = rng.random();
    direction_from_angle(angle) * direction.signs() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_launch_magnitude_constant() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let v = launch_vector(&mut rng, 320.0);
            assert!((v.length() - 320.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_launch_angle_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..200 {
            let v = launch_vector(&mut rng, 1.0);
            let steepness = v.y.abs().atan2(v.x.abs());
            assert!(steepness >= LAUNCH_ANGLE_MIN - 1e-5);
            assert!(steepness <= LAUNCH_ANGLE_MAX + 1e-5);
        }
    }

    #[test]
    fn test_all_four_directions_occur() {
        let mut rng = Pcg32::seed_from_u64(3);
        let seen: HashSet<_> = (0..200)
            .map(|_| {
                let v = launch_vector(&mut rng, 1.0);
                (v.x > 0.0, v.y > 0.0)
            })
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_launch_reproducible_per_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(launch_vector(&mut a, 300.0), launch_vector(&mut b, 300.0));
        }
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(LaunchDirection::LeftUp.signs(), Vec2::new(-1.0, -1.0));
        assert_eq!(LaunchDirection::RightDown.signs(), Vec2::new(1.0, 1.0));
    }
}
