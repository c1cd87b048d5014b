//! Conversions from external infrastructure errors into domain errors.

use bugout_domain::BugoutError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BugoutError);

impl From<InfraError> for BugoutError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BugoutError> for InfraError {
    fn from(value: BugoutError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBugoutError {
    fn into_bugout(self) -> BugoutError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BugoutError */
/* -------------------------------------------------------------------------- */

impl IntoBugoutError for HttpError {
    fn into_bugout(self) -> BugoutError {
        let url = self.url().map(|u| u.to_string()).unwrap_or_default();

        if self.is_timeout() {
            return BugoutError::Transport(format!("HTTP request timed out: {url}"));
        }

        if self.is_connect() {
            return BugoutError::Transport(format!("HTTP connection failure: {url}"));
        }

        if self.is_builder() {
            return BugoutError::Transport(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return BugoutError::Transport(format!("failed to read HTTP response body: {self}"));
        }

        BugoutError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_bugout())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
