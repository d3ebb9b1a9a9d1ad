//! User-visible error notice with auto-dismiss.
//!
//! The session carries at most one notice. It never blocks anything else:
//! dataset and bindings stay usable while it is shown.

use crate::constants::ERROR_DISMISS_MS;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct ErrorNotice {
    pub message: String,
    pub raised_at: Instant,
    pub duration: Duration,
}

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
            duration: Duration::from_millis(ERROR_DISMISS_MS),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_raised_at(mut self, raised_at: Instant) -> Self {
        self.raised_at = raised_at;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Fraction of display time left, 1.0 when fresh, 0.0 when expired
    pub fn remaining_percent_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.raised_at);
        1.0 - (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl PartialEq for ErrorNotice {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}
