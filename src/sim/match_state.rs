//! Scores, win condition and round lifecycle
//!
//! ```text
//! Serving --launch--> InPlay --goal--> Scored --serve--> Serving
//!                                 \--winning goal--> Finished --reset--> Serving
//! ```

use serde::{Deserialize, Serialize};

use super::body::Player;
use super::collision::GoalSide;
use crate::consts::WIN_SCORE;

/// Where the current round is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball resting at the centre, waiting for the launch trigger
    Serving,
    /// Ball in motion
    InPlay,
    /// A point was just scored, waiting for the next serve
    Scored,
    /// Someone reached the winning score. Terminal until `reset`.
    Finished,
}

/// Result of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalOutcome {
    pub scorer: Player,
    /// The scorer's new total
    pub score: u8,
    /// Set when this goal ended the match
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub user_score: u8,
    pub enemy_score: u8,
    pub phase: Phase,
    pub winner: Option<Player>,
    pub win_score: u8,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(WIN_SCORE)
    }
}

impl MatchState {
    pub fn new(win_score: u8) -> Self {
        Self {
            user_score: 0,
            enemy_score: 0,
            phase: Phase::Serving,
            winner: None,
            win_score: win_score.max(1),
        }
    }

    pub fn score(&self, player: Player) -> u8 {
        match player {
            Player::User => self.user_score,
            Player::Enemy => self.enemy_score,
        }
    }

    /// Serving -> InPlay. Returns false (and changes nothing) in any other phase.
    pub fn launch(&mut self) -> bool {
        if self.phase != Phase::Serving {
            return false;
        }
        self.phase = Phase::InPlay;
        true
    }

    /// Credit a goal to the player attacking `goal`.
    ///
    /// Only counts while the ball is in play. The win check happens on the
    /// increment itself, so a score can never pass `win_score`.
    pub fn record_goal(&mut self, goal: GoalSide) -> Option<GoalOutcome> {
        if self.phase != Phase::InPlay {
            return None;
        }

        let scorer = goal.scorer();
        let score = match scorer {
            Player::User => &mut self.user_score,
            Player::Enemy => &mut self.enemy_score,
        };
        *score += 1;
        let score = *score;

        if score >= self.win_score {
            self.phase = Phase::Finished;
            self.winner = Some(scorer);
        } else {
            self.phase = Phase::Scored;
        }

        Some(GoalOutcome {
            scorer,
            score,
            winner: self.winner,
        })
    }

    /// Scored -> Serving. Returns false in any other phase.
    pub fn serve(&mut self) -> bool {
        if self.phase != Phase::Scored {
            return false;
        }
        self.phase = Phase::Serving;
        true
    }

    /// Zero the scores and go back to Serving, whatever the phase
    pub fn reset(&mut self) {
        *self = Self::new(self.win_score);
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
