//! URL submission form state.
//!
//! Validation happens before any request is issued; a rejected URL never
//! reaches the network. `busy` blocks resubmission while a request is out.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use catalog::TrackRequest;
use catalog::track::{success_notice, validate_tracking_url};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackFormState {
    pub input: String,
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl TrackFormState {
    /// Validate the input and enter the busy state.
    ///
    /// Returns the request to send, or `None` if already busy or the input
    /// was rejected (in which case `error` is set).
    pub fn begin_submit(&mut self) -> Option<TrackRequest> {
        if self.busy {
            return None;
        }
        self.notice = None;
        match validate_tracking_url(&self.input) {
            Ok(target) => {
                self.busy = true;
                self.error = None;
                Some(TrackRequest::from(target))
            }
            Err(rejection) => {
                self.error = Some(rejection.to_string());
                None
            }
        }
    }

    /// Apply a successful response body.
    pub fn finish_success(&mut self, response: &serde_json::Value) {
        self.busy = false;
        self.error = None;
        self.input.clear();
        self.notice = Some(success_notice(response));
    }

    /// Return to idle with an inline error.
    pub fn finish_failure(&mut self, message: String) {
        self.busy = false;
        self.notice = None;
        self.error = Some(message);
    }
}
