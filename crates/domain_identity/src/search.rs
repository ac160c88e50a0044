//! Search orchestration
//!
//! Sequences a validated ID number through the external lookup and maps the
//! outcome. The orchestrator issues exactly one port call per invocation -
//! no retries, no coalescing of concurrent invocations. Duplicate-submission
//! protection is the caller's gating responsibility
//! (see [`crate::session::SearchSession`]).

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::OperationMetadata;

use crate::error::SearchError;
use crate::id_number::ParsedId;
use crate::ports::{HolidayRecord, IdLookupPort, LookupRequest, LookupResponse};

/// One public holiday in the profile's birth year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl From<HolidayRecord> for Holiday {
    fn from(record: HolidayRecord) -> Self {
        Self {
            date: record.date,
            name: record.name,
        }
    }
}

/// The display-ready result of a completed search.
///
/// Field-for-field projection of the service payload - no transformation
/// beyond renaming. Write-once per search; a new search replaces it
/// entirely, never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub is_citizen: bool,
    /// Ordered as the service returned them
    pub holidays: Vec<Holiday>,
}

impl From<LookupResponse> for LookupResult {
    fn from(response: LookupResponse) -> Self {
        Self {
            date_of_birth: response.dob,
            gender: response.gender,
            is_citizen: response.citizen,
            holidays: response.holidays.into_iter().map(Holiday::from).collect(),
        }
    }
}

/// Orchestrates a validated identifier through the external lookup.
///
/// Invoked only when the current validation outcome is `Valid` - callers
/// gate the action; the orchestrator does not re-validate.
pub struct SearchOrchestrator {
    port: Arc<dyn IdLookupPort>,
}

impl SearchOrchestrator {
    /// Creates an orchestrator over the given lookup port.
    pub fn new(port: Arc<dyn IdLookupPort>) -> Self {
        Self { port }
    }

    /// Runs one search for the given parsed ID.
    ///
    /// Sends the original 13-digit string, issues exactly one port call, and
    /// maps the response payload field-for-field into [`LookupResult`]. A
    /// failure is folded into [`SearchError`], preferring the service's
    /// embedded message over the generic default.
    pub async fn search(
        &self,
        id: &ParsedId,
        metadata: Option<OperationMetadata>,
    ) -> Result<LookupResult, SearchError> {
        let request = LookupRequest::new(id.digits());

        match self.port.lookup(request, metadata).await {
            Ok(response) => {
                info!(holidays = response.holidays.len(), "Search completed");
                Ok(LookupResult::from(response))
            }
            Err(error) => {
                warn!(error = %error, transient = error.is_transient(), "Search failed");
                Err(SearchError::from_port(&error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DEFAULT_SEARCH_FAILURE_MESSAGE;
    use crate::ports::mock::MockLookupPort;
    use crate::validation::IdValidator;

    fn parsed(candidate: &str) -> ParsedId {
        IdValidator::validate(candidate)
            .into_parsed()
            .expect("fixture must validate")
    }

    fn canned_response() -> LookupResponse {
        LookupResponse {
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            gender: "Male".to_string(),
            citizen: true,
            holidays: vec![
                HolidayRecord {
                    date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                    name: "New Year's Day".to_string(),
                },
                HolidayRecord {
                    date: NaiveDate::from_ymd_opt(1980, 12, 25).unwrap(),
                    name: "Christmas Day".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_maps_response_verbatim() {
        let port = MockLookupPort::new()
            .with_response("8001015009087", canned_response())
            .await;
        let port = Arc::new(port);
        let orchestrator = SearchOrchestrator::new(port.clone());

        let result = orchestrator
            .search(&parsed("8001015009087"), None)
            .await
            .unwrap();

        assert_eq!(result.date_of_birth, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
        assert_eq!(result.gender, "Male");
        assert!(result.is_citizen);
        assert_eq!(result.holidays.len(), 2);
        assert_eq!(result.holidays[0].name, "New Year's Day");
        assert_eq!(result.holidays[1].date, NaiveDate::from_ymd_opt(1980, 12, 25).unwrap());
    }

    #[tokio::test]
    async fn test_exactly_one_port_call_per_invocation() {
        let port = Arc::new(
            MockLookupPort::new()
                .with_outage("8001015009087")
                .await,
        );
        let orchestrator = SearchOrchestrator::new(port.clone());

        // Failure must not trigger an internal retry
        let outcome = orchestrator.search(&parsed("8001015009087"), None).await;
        assert!(outcome.is_err());
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_prefers_service_message() {
        let port = Arc::new(
            MockLookupPort::new()
                .with_rejection("8001015009087", Some("ID number not on record".to_string()))
                .await,
        );
        let orchestrator = SearchOrchestrator::new(port);

        let error = orchestrator
            .search(&parsed("8001015009087"), None)
            .await
            .unwrap_err();
        assert_eq!(error.message(), "ID number not on record");
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_default() {
        let port = Arc::new(
            MockLookupPort::new()
                .with_rejection("8001015009087", None)
                .await,
        );
        let orchestrator = SearchOrchestrator::new(port);

        let error = orchestrator
            .search(&parsed("8001015009087"), None)
            .await
            .unwrap_err();
        assert_eq!(error.message(), DEFAULT_SEARCH_FAILURE_MESSAGE);
    }
}
