//! Round countdown.
//!
//! The countdown is driven from outside: either one [`Countdown::tick`] per
//! timer callback, or [`Countdown::advance`] with measured wall-clock time,
//! which converts elapsed time into whole ticks and carries the remainder
//! to the next call. Either way time only ever moves in `tick_ms` steps.

use std::time::Duration;

/// Result of feeding time into the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this much left.
    Running(u64),
    /// Reached zero on this call. Reported exactly once.
    Expired,
    /// Already expired or cancelled; nothing changed.
    Idle,
}

/// Cancellable fixed-step countdown.
#[derive(Clone, Debug)]
pub struct Countdown {
    duration_ms: u64,
    tick_ms: u64,
    remaining_ms: u64,
    carry: Duration,
    running: bool,
}

impl Countdown {
    /// A stopped countdown holding the full duration.
    #[must_use]
    pub fn new(duration_ms: u64, tick_ms: u64) -> Self {
        Self {
            duration_ms,
            tick_ms: tick_ms.max(1),
            remaining_ms: duration_ms,
            carry: Duration::ZERO,
            running: false,
        }
    }

    /// Start (or resume) counting down.
    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.running = true;
        }
    }

    /// Stop without expiring. Further ticks are ignored.
    pub fn cancel(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[must_use]
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Share of the round left, from 1.0 down to 0.0.
    #[must_use]
    pub fn fraction_remaining(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.remaining_ms as f64 / self.duration_ms as f64
    }

    /// Apply one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(self.tick_ms);
        if self.remaining_ms == 0 {
            self.running = false;
            self.carry = Duration::ZERO;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining_ms)
        }
    }

    /// Apply as many whole ticks as fit in `elapsed` plus the carried
    /// remainder.
    pub fn advance(&mut self, elapsed: Duration) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        let step = Duration::from_millis(self.tick_ms);
        self.carry += elapsed;

        let mut outcome = TickOutcome::Running(self.remaining_ms);
        while self.carry >= step {
            self.carry -= step;
            outcome = self.tick();
            if outcome == TickOutcome::Expired {
                break;
            }
        }
        outcome
    }
}
