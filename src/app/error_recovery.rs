//! Error notice handling. Independent of the dataset and bindings: raising
//! an error never rolls back what was already committed.

use super::state::SessionStore;
use crate::notifications::ErrorNotice;
use std::time::Instant;

impl SessionStore {
    pub fn set_error(&mut self, message: impl Into<String>) {
        let notice =
            ErrorNotice::new(message).with_duration(self.settings.error_dismiss_after());
        tracing::debug!(message = %notice.message, "Error raised");
        self.state.error = Some(notice);
    }

    /// Surface any error as the session's error text
    pub fn report(&mut self, err: &dyn std::error::Error) {
        tracing::error!("{}", err);
        self.set_error(err.to_string());
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Clear the error once its display time has elapsed. Returns true if one
    /// was dismissed.
    pub fn dismiss_expired_error(&mut self, now: Instant) -> bool {
        let expired = self
            .state
            .error
            .as_ref()
            .is_some_and(|notice| notice.is_expired_at(now));
        if expired {
            self.state.error = None;
        }
        expired
    }
}
