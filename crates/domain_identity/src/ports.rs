//! Identity Domain Ports
//!
//! This module defines the port interface for the external processing
//! service that resolves a validated ID number into a profile. The service's
//! internals (persistence, holiday-calendar provider) are opaque; only the
//! request/response contract is modeled here.
//!
//! # Adapters
//!
//! - **REST Adapter** ([`crate::adapters::RestLookupAdapter`]): calls the
//!   service over HTTP
//! - **Mock Adapter** ([`mock::MockLookupPort`]): in-memory, for testing
//!   without the external dependency
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_identity::ports::IdLookupPort;
//! use std::sync::Arc;
//!
//! pub struct SearchOrchestrator {
//!     port: Arc<dyn IdLookupPort>,
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, HealthCheckable, OperationMetadata, PortError};

/// Request sent to the external processing service.
///
/// Carries the original 13-digit identifier string, not the decomposed
/// fields - the service is the authority on decoding for its own purposes,
/// even though the client already decoded it for gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub id_number: String,
}

impl LookupRequest {
    /// Creates a request for the given 13-digit identifier.
    pub fn new(id_number: impl Into<String>) -> Self {
        Self {
            id_number: id_number.into(),
        }
    }
}

/// One public holiday in the decoded birth year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
}

/// Successful response payload from the processing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Full date of birth as resolved by the service
    pub dob: NaiveDate,
    /// Decoded gender, verbatim from the service
    pub gender: String,
    /// Whether the ID number belongs to a citizen
    pub citizen: bool,
    /// Public holidays for the decoded birth year, in calendar order
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// Failure payload the service may return alongside an error status.
///
/// The `message` field is optional on the wire; its absence triggers the
/// orchestrator's default failure message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupFailure {
    #[serde(default)]
    pub message: Option<String>,
}

/// The port trait for the ID lookup collaborator.
///
/// One operation: resolve a validated 13-digit ID number into a profile.
/// Implementations make exactly one request per call - retry policy belongs
/// to the user, not the adapter (the orchestrator contract forbids internal
/// retries).
#[async_trait]
pub trait IdLookupPort: DomainPort + HealthCheckable {
    /// Resolves an ID number into its profile.
    ///
    /// # Arguments
    ///
    /// * `request` - The lookup request carrying the 13-digit identifier
    /// * `metadata` - Optional operation metadata for tracing
    ///
    /// # Returns
    ///
    /// The profile payload, or a `PortError` describing the failure. A
    /// service-reported rejection arrives as `PortError::Rejected` with the
    /// payload's optional message preserved.
    async fn lookup(
        &self,
        request: LookupRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<LookupResponse, PortError>;
}

/// Mock implementation of IdLookupPort for testing
///
/// Stores canned responses in memory and is useful for unit testing without
/// the external service.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// Canned behavior for one ID number.
    #[derive(Debug, Clone)]
    enum MockOutcome {
        Respond(LookupResponse),
        Reject(Option<String>),
        Unavailable,
    }

    /// In-memory mock implementation of IdLookupPort
    #[derive(Debug, Default)]
    pub struct MockLookupPort {
        outcomes: Arc<RwLock<HashMap<String, MockOutcome>>>,
        calls: AtomicU64,
    }

    impl MockLookupPort {
        /// Creates a new mock port with no canned entries
        pub fn new() -> Self {
            Self::default()
        }

        /// Cans a successful response for an ID number
        pub async fn with_response(self, id_number: impl Into<String>, response: LookupResponse) -> Self {
            self.outcomes
                .write()
                .await
                .insert(id_number.into(), MockOutcome::Respond(response));
            self
        }

        /// Cans a service-reported rejection, optionally carrying a message
        pub async fn with_rejection(
            self,
            id_number: impl Into<String>,
            message: Option<String>,
        ) -> Self {
            self.outcomes
                .write()
                .await
                .insert(id_number.into(), MockOutcome::Reject(message));
            self
        }

        /// Cans a transport-level failure for an ID number
        pub async fn with_outage(self, id_number: impl Into<String>) -> Self {
            self.outcomes
                .write()
                .await
                .insert(id_number.into(), MockOutcome::Unavailable);
            self
        }

        /// Number of lookup calls received so far
        pub fn calls(&self) -> u64 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl DomainPort for MockLookupPort {}

    #[async_trait]
    impl HealthCheckable for MockLookupPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-id-lookup".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl IdLookupPort for MockLookupPort {
        async fn lookup(
            &self,
            request: LookupRequest,
            _metadata: Option<OperationMetadata>,
        ) -> Result<LookupResponse, PortError> {
            self.calls.fetch_add(1, Ordering::Relaxed);

            match self.outcomes.read().await.get(&request.id_number) {
                Some(MockOutcome::Respond(response)) => Ok(response.clone()),
                Some(MockOutcome::Reject(message)) => Err(PortError::Rejected {
                    message: message.clone(),
                }),
                Some(MockOutcome::Unavailable) => Err(PortError::ServiceUnavailable {
                    service: "mock-id-lookup".to_string(),
                }),
                None => Err(PortError::not_found("Profile", &request.id_number)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockLookupPort;
    use super::*;

    fn canned_response() -> LookupResponse {
        LookupResponse {
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            gender: "Male".to_string(),
            citizen: true,
            holidays: vec![HolidayRecord {
                date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                name: "New Year's Day".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_mock_port_canned_response() {
        let port = MockLookupPort::new()
            .with_response("8001015009087", canned_response())
            .await;

        let response = port
            .lookup(LookupRequest::new("8001015009087"), None)
            .await
            .unwrap();
        assert_eq!(response, canned_response());
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_port_rejection_preserves_message() {
        let port = MockLookupPort::new()
            .with_rejection("8001015009087", Some("No record".to_string()))
            .await;

        let error = port
            .lookup(LookupRequest::new("8001015009087"), None)
            .await
            .unwrap_err();
        assert_eq!(error.service_message(), Some("No record"));
    }

    #[tokio::test]
    async fn test_mock_port_unknown_id_not_found() {
        let port = MockLookupPort::new();
        let error = port
            .lookup(LookupRequest::new("2001014800086"), None)
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_request_serializes_to_wire_contract() {
        let request = LookupRequest::new("2001014800086");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "idNumber": "2001014800086" }));
    }

    #[test]
    fn test_response_deserializes_from_wire_contract() {
        let json = serde_json::json!({
            "dob": "2000-01-01",
            "gender": "Female",
            "citizen": false,
            "holidays": [
                { "date": "2000-01-01", "name": "New Year's Day" },
                { "date": "2000-03-21", "name": "Human Rights Day" }
            ]
        });
        let response: LookupResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.dob, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(response.gender, "Female");
        assert!(!response.citizen);
        assert_eq!(response.holidays.len(), 2);
        assert_eq!(response.holidays[1].name, "Human Rights Day");
    }

    #[test]
    fn test_failure_payload_message_optional() {
        let with: LookupFailure =
            serde_json::from_value(serde_json::json!({ "message": "down" })).unwrap();
        assert_eq!(with.message.as_deref(), Some("down"));

        let without: LookupFailure = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(without.message.is_none());
    }
}
