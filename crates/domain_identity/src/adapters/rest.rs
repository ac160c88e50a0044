//! REST Lookup Adapter
//!
//! Connects to the external processing service over HTTP, implementing the
//! [`IdLookupPort`] trait. Translates between the service's wire format and
//! the domain types.
//!
//! # Error Handling
//!
//! HTTP outcomes are mapped to `PortError` variants:
//! - any error status whose payload carries a `message` -> `Rejected` with
//!   that message preserved
//! - 404 without a payload message -> `NotFound`
//! - other 4xx without a message -> `Rejected` without a message
//! - 5xx without a message -> `ServiceUnavailable`
//! - request timeout -> `Timeout`
//! - connection failures -> `Connection`
//! - unparseable success payload -> `Transformation`
//!
//! The adapter makes exactly one request per `lookup` call. There is no
//! internal retry: the orchestrator contract is one attempt per
//! user-initiated search.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use tracing::{debug, warn};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};

use crate::ports::{IdLookupPort, LookupFailure, LookupRequest, LookupResponse};

/// Configuration for the REST lookup adapter.
#[derive(Debug, Clone)]
pub struct RestLookupConfig {
    /// Base URL of the processing service (e.g. "https://lookup.example.com/api/v1")
    pub base_url: String,

    /// Optional API key sent as the `X-Api-Key` header
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RestLookupConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// REST adapter implementing the [`IdLookupPort`] trait.
///
/// # Example
///
/// ```rust,ignore
/// use domain_identity::adapters::{RestLookupAdapter, RestLookupConfig};
///
/// let adapter = RestLookupAdapter::new(RestLookupConfig {
///     base_url: "https://lookup.example.com/api/v1".to_string(),
///     api_key: std::env::var("LOOKUP_API_KEY").ok(),
///     ..Default::default()
/// })?;
///
/// let profile = adapter.lookup(LookupRequest::new("8001015009087"), None).await?;
/// ```
#[derive(Debug)]
pub struct RestLookupAdapter {
    config: RestLookupConfig,
    client: reqwest::Client,
}

impl RestLookupAdapter {
    /// Creates a new REST adapter with the given configuration.
    pub fn new(config: RestLookupConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortError::Internal {
                message: "Failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { config, client })
    }

    /// Returns the base URL of the processing service.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_send_error(&self, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: "id-search".to_string(),
                duration_ms: self.config.timeout_secs * 1000,
            }
        } else {
            PortError::Connection {
                message: "Request to lookup service failed".to_string(),
                source: Some(Box::new(error)),
            }
        }
    }

    /// Maps an error status plus its (possibly absent) failure payload.
    fn map_error_status(
        status: StatusCode,
        failure: LookupFailure,
        id_number: &str,
    ) -> PortError {
        if failure.message.is_some() {
            return PortError::Rejected {
                message: failure.message,
            };
        }
        match status {
            StatusCode::NOT_FOUND => PortError::not_found("Profile", id_number),
            s if s.is_server_error() => PortError::ServiceUnavailable {
                service: "id-lookup".to_string(),
            },
            _ => PortError::rejected_without_message(),
        }
    }
}

impl DomainPort for RestLookupAdapter {}

#[async_trait]
impl HealthCheckable for RestLookupAdapter {
    /// Calls the service's health endpoint to verify connectivity.
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let outcome = self.client.get(self.endpoint("health")).send().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match outcome {
            Ok(response) if response.status().is_success() => (AdapterHealth::Healthy, None),
            Ok(response) => (
                AdapterHealth::Degraded,
                Some(format!("Health endpoint returned {}", response.status())),
            ),
            Err(error) => (AdapterHealth::Unhealthy, Some(error.to_string())),
        };

        HealthCheckResult {
            adapter_id: "rest-id-lookup".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl IdLookupPort for RestLookupAdapter {
    async fn lookup(
        &self,
        request: LookupRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<LookupResponse, PortError> {
        let url = self.endpoint("id-search");
        let correlation_id = metadata
            .as_ref()
            .and_then(|m| m.correlation_id.clone())
            .unwrap_or_default();
        debug!(url = %url, correlation_id = %correlation_id, "Submitting ID lookup");

        let mut outbound = self.client.post(&url).json(&request);
        if let Some(ref api_key) = self.config.api_key {
            outbound = outbound.header("X-Api-Key", api_key);
        }
        if !correlation_id.is_empty() {
            outbound = outbound.header("X-Correlation-Id", &correlation_id);
        }

        let response = outbound.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();

        if status.is_success() {
            let payload: LookupResponse =
                response.json().await.map_err(|e| {
                    PortError::transformation(format!("Invalid lookup payload: {e}"))
                })?;
            debug!(
                holidays = payload.holidays.len(),
                correlation_id = %correlation_id,
                "Lookup succeeded"
            );
            return Ok(payload);
        }

        // Failure path: the error payload is optional, and so is its message.
        let failure: LookupFailure = response.json().await.unwrap_or_default();
        let error = Self::map_error_status(status, failure, &request.id_number);
        warn!(status = %status, error = %error, correlation_id = %correlation_id, "Lookup failed");
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let adapter = RestLookupAdapter::new(RestLookupConfig {
            base_url: "https://lookup.example.com/api/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            adapter.endpoint("id-search"),
            "https://lookup.example.com/api/v1/id-search"
        );
    }

    #[test]
    fn test_error_status_prefers_payload_message() {
        let error = RestLookupAdapter::map_error_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            LookupFailure {
                message: Some("Holiday calendar unavailable".to_string()),
            },
            "8001015009087",
        );
        assert_eq!(error.service_message(), Some("Holiday calendar unavailable"));
    }

    #[test]
    fn test_error_status_without_message() {
        let error = RestLookupAdapter::map_error_status(
            StatusCode::NOT_FOUND,
            LookupFailure::default(),
            "8001015009087",
        );
        assert!(error.is_not_found());

        let error = RestLookupAdapter::map_error_status(
            StatusCode::BAD_GATEWAY,
            LookupFailure::default(),
            "8001015009087",
        );
        assert!(error.is_transient());

        let error = RestLookupAdapter::map_error_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            LookupFailure::default(),
            "8001015009087",
        );
        assert!(matches!(error, PortError::Rejected { message: None }));
    }
}
