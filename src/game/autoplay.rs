//! Timer-driven replay
//!
//! `AutoPlayer` does not own a timer. The caller polls it with the current
//! instant (from a tokio interval, an event loop, a game loop) and it
//! applies at most one planned move per poll once the deadline passes.

use crate::game::session::{Session, StepOutcome};
use crate::{HanoiError, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Delay between automatic moves, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TickInterval(u64);

impl TickInterval {
    pub const MIN_MS: u64 = 100;
    pub const MAX_MS: u64 = 2000;
    pub const DEFAULT_MS: u64 = 500;
    /// Adjustment applied by `faster` and `slower`
    pub const STEP_MS: u64 = 100;

    pub fn new(ms: u64) -> Result<Self> {
        if (Self::MIN_MS..=Self::MAX_MS).contains(&ms) {
            Ok(TickInterval(ms))
        } else {
            Err(HanoiError::InvalidInterval(ms))
        }
    }

    /// Like `new`, but saturates to the allowed range
    pub fn clamped(ms: u64) -> Self {
        TickInterval(ms.clamp(Self::MIN_MS, Self::MAX_MS))
    }

    /// One step shorter, stopping at the minimum
    pub fn faster(&self) -> Self {
        TickInterval::clamped(self.0.saturating_sub(Self::STEP_MS))
    }

    /// One step longer, stopping at the maximum
    pub fn slower(&self) -> Self {
        TickInterval::clamped(self.0.saturating_add(Self::STEP_MS))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        TickInterval(Self::DEFAULT_MS)
    }
}

impl TryFrom<u64> for TickInterval {
    type Error = HanoiError;

    fn try_from(ms: u64) -> Result<Self> {
        TickInterval::new(ms)
    }
}

impl From<TickInterval> for u64 {
    fn from(interval: TickInterval) -> u64 {
        interval.0
    }
}

/// Cooperative auto-play scheduler for one session
#[derive(Debug)]
pub struct AutoPlayer {
    interval: TickInterval,
    next_deadline: Option<Instant>,
    running: bool,
}

impl AutoPlayer {
    /// Create a player whose first move falls due one interval after `now`
    pub fn start(interval: TickInterval, now: Instant) -> Self {
        AutoPlayer {
            interval,
            next_deadline: Some(now + interval.as_duration()),
            running: true,
        }
    }

    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Change the speed
    ///
    /// The pending deadline is kept; the new interval is used when the
    /// following deadline is scheduled.
    pub fn set_interval(&mut self, interval: TickInterval) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    /// Stop scheduling further moves
    pub fn stop(&mut self) {
        self.running = false;
        self.next_deadline = None;
    }

    /// Advance the session by at most one move if a tick is due
    ///
    /// Returns `None` when nothing was due (or the player is stopped).
    /// Reaching the end of the plan stops the player.
    pub fn poll(&mut self, session: &mut Session, now: Instant) -> Option<StepOutcome> {
        let deadline = self.next_deadline?;
        if !self.running || now < deadline {
            return None;
        }

        let outcome = session.apply_next_planned_move();
        if session.is_complete() || outcome == StepOutcome::PlanExhausted {
            self.stop();
        } else {
            // Late polls do not bank ticks: the next move is one interval from now
            self.next_deadline = Some(now + self.interval.as_duration());
        }
        Some(outcome)
    }
}
