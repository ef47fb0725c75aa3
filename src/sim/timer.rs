//! One-shot deferred actions owned by the game loop

use serde::{Deserialize, Serialize};

/// Something the game loop should do once a delay has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Put the ball back at the centre and wait for a launch
    ServeNextRound,
    /// Clear the result and start a fresh match
    ResetMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Pending {
    action: DeferredAction,
    remaining: f32,
}

/// Holds at most one pending action. Scheduling replaces whatever was pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OneShotTimer {
    pending: Option<Pending>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `action` after `delay_secs`. A zero (or negative) delay fires on the next `advance`.
    pub fn schedule(&mut self, action: DeferredAction, delay_secs: f32) {
        if let Some(previous) = self.pending {
            log::debug!("Replacing pending {:?} with {:?}", previous.action, action);
        }
        self.pending = Some(Pending {
            action,
            remaining: delay_secs.max(0.0),
        });
    }

    /// Drop the pending action, returning it if there was one
    pub fn cancel(&mut self) -> Option<DeferredAction> {
        self.pending.take().map(|p| p.action)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_action(&self) -> Option<DeferredAction> {
        self.pending.map(|p| p.action)
    }

    /// Seconds left before the pending action fires
    pub fn remaining(&self) -> Option<f32> {
        self.pending.map(|p| p.remaining)
    }

    /// Count down by `dt`. Returns the action exactly once, when it comes due.
    /// Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f32) -> Option<DeferredAction> {
        if !(dt.is_finite() && dt >= 0.0) {
            return None;
        }
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt;
        if pending.remaining <= 0.0 {
            return self.pending.take().map(|p| p.action);
        }
        None
    }
}
