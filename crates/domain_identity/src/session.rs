//! Search session state
//!
//! The explicit state struct owned by the presentation layer: candidate
//! text, the latest validation outcome, trigger gating, and the last
//! completed result. The validator and orchestrator stay pure; the session
//! receives events and returns signals instead of mutating shared state.
//!
//! # Concurrency model
//!
//! Single-threaded and event-driven. Input changes run validation
//! synchronously; only the service call suspends. While a call is
//! outstanding the trigger is disabled, and input keeps being accepted. No
//! cancellation is modeled: each search is stamped with a generation, and a
//! completion whose ticket is no longer current is discarded.
//!
//! # Result lifecycle
//!
//! The last result is cleared when a new search starts (so a failed search
//! leaves no stale result displayed) and when an input change invalidates
//! the current candidate.

use crate::error::SearchError;
use crate::id_number::ParsedId;
use crate::search::LookupResult;
use crate::validation::{IdValidator, ValidationOutcome};

/// Ticket identifying one started search.
///
/// Opaque to callers; hand it back to [`SearchSession::complete_search`]
/// with the search's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// User-visible signal produced by a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSignal {
    /// The search succeeded; the session now holds its result
    Success,
    /// The search failed; surface the mapped message as a notification
    Failure(String),
    /// The response arrived after the input or search changed; ignore it
    Discarded,
}

/// Presentation-layer search state.
#[derive(Debug, Default)]
pub struct SearchSession {
    candidate: String,
    outcome: Option<ValidationOutcome>,
    generation: u64,
    in_flight: bool,
    last_result: Option<LookupResult>,
}

impl SearchSession {
    /// Creates a session with an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles an input-change event.
    ///
    /// Trims the raw text, revalidates synchronously, and updates gating.
    /// Any in-flight search becomes stale: its eventual completion will be
    /// discarded. A change that invalidates the candidate also clears the
    /// displayed result.
    pub fn on_candidate_changed(&mut self, raw_text: &str) {
        let trimmed = raw_text.trim();
        if trimmed == self.candidate && self.outcome.is_some() {
            return;
        }

        self.candidate = trimmed.to_string();
        self.outcome = Some(IdValidator::validate(&self.candidate));
        self.generation += 1;

        if !self.is_valid() {
            self.last_result = None;
        }
    }

    /// The current trimmed candidate.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// The latest validation outcome, if any input has been seen.
    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    fn is_valid(&self) -> bool {
        self.outcome.as_ref().is_some_and(ValidationOutcome::is_valid)
    }

    /// The inline error for the current candidate.
    ///
    /// `None` while the candidate is empty (an empty field shows no error)
    /// or valid.
    pub fn inline_error(&self) -> Option<&'static str> {
        if self.candidate.is_empty() {
            return None;
        }
        self.outcome.as_ref()?.reason().map(|r| r.message())
    }

    /// Whether the search trigger is enabled.
    ///
    /// True only when the latest outcome is valid and no search is
    /// outstanding. This gating is the sole protection against duplicate
    /// submissions.
    pub fn can_search(&self) -> bool {
        self.is_valid() && !self.in_flight
    }

    /// Whether a search is currently outstanding.
    pub fn search_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The last completed search's result, if one is displayed.
    pub fn last_result(&self) -> Option<&LookupResult> {
        self.last_result.as_ref()
    }

    /// Starts a search for the current candidate.
    ///
    /// Returns the ticket to complete later and the parsed ID to hand to the
    /// orchestrator, or `None` when the trigger is disabled. Clears the
    /// previous result before the attempt: a subsequent failure leaves no
    /// result displayed.
    pub fn begin_search(&mut self) -> Option<(SearchTicket, ParsedId)> {
        if !self.can_search() {
            return None;
        }
        let parsed = self.outcome.as_ref()?.parsed()?.clone();

        self.in_flight = true;
        self.last_result = None;
        self.generation += 1;

        Some((
            SearchTicket {
                generation: self.generation,
            },
            parsed,
        ))
    }

    /// Completes a search.
    ///
    /// Re-arms the trigger. The outcome is applied only when the ticket is
    /// still current; a response that arrives after the input changed (or
    /// after a newer search started) is reported as discarded and the
    /// session is left untouched.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<LookupResult, SearchError>,
    ) -> SearchSignal {
        self.in_flight = false;

        if ticket.generation != self.generation {
            return SearchSignal::Discarded;
        }

        match outcome {
            Ok(result) => {
                self.last_result = Some(result);
                SearchSignal::Success
            }
            Err(error) => SearchSignal::Failure(error.message().to_string()),
        }
    }
}
