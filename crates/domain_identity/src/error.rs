//! Identity domain errors
//!
//! Validation failures are values ([`crate::validation::ValidationOutcome`]),
//! not errors; the only error type this domain produces is [`SearchError`],
//! the user-facing failure of a search.

use thiserror::Error;

use core_kernel::PortError;

/// Default message shown when a search fails without the service providing
/// one of its own.
pub const DEFAULT_SEARCH_FAILURE_MESSAGE: &str =
    "The search could not be completed. Please try again.";

/// A failed search, carrying the message to surface to the user.
///
/// The message is the one embedded in the service's failure payload when
/// present, otherwise [`DEFAULT_SEARCH_FAILURE_MESSAGE`]. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchError {
    message: String,
}

impl SearchError {
    /// The user-facing failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Folds a port failure into the user-facing error, preferring the
    /// service's embedded message over the generic default.
    pub(crate) fn from_port(error: &PortError) -> Self {
        let message = error
            .service_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_SEARCH_FAILURE_MESSAGE)
            .to_string();
        Self { message }
    }
}
