//! Trailing-edge debounce bookkeeping.
//!
//! Each call pushes the deadline out; only the newest deadline fires. The
//! browser timer itself lives in the wiring layer, which arms one timeout
//! per call and lets `poll` decide whether that timeout is still the live
//! one when it lands.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Debounce state for one event stream.
#[derive(Clone, Copy, Debug)]
pub struct TrailingEdge {
    quiet_ms: f64,
    deadline: Option<f64>,
}

impl TrailingEdge {
    #[must_use]
    pub fn new(quiet_ms: f64) -> Self {
        Self { quiet_ms, deadline: None }
    }

    /// Record a call at `now_ms` and return the deadline it set.
    pub fn call(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.quiet_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// Whether a timer landing at `now_ms` should fire.
    ///
    /// Returns true at most once per quiet window; a superseded timer polls
    /// before the live deadline and is told no.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a fire is still owed.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
