//! Throttle and debounce gates
//!
//! Time is passed in (ms) so the rules can be checked without timers.

/// `setTimeout` delay for a millisecond count, saturating instead of wrapping
pub fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Passes the first call, then blocks until `limit_ms` has elapsed
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            blocked_until: None,
        }
    }

    pub fn try_fire(&mut self, now: f64) -> bool {
        match self.blocked_until {
            Some(until) if now < until => false,
            _ => {
                self.blocked_until = Some(now + self.limit_ms);
                true
            }
        }
    }
}

/// Fires once, `wait_ms` after the last trigger
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Restart the wait
    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.wait_ms);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending call is due (None when idle)
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now).max(0.0))
    }

    /// True once the wait has run out since the last trigger
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
