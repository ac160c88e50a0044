//! Identity handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use core_kernel::OperationMetadata;
use domain_identity::{IdValidator, ValidationOutcome};

use crate::dto::identity::{IdNumberRequest, SearchResponse, ValidateResponse};
use crate::error::ApiError;
use crate::AppState;

/// Validates a candidate ID number.
///
/// The raw text is trimmed here - the validator does not trim.
pub async fn validate_id(
    State(_state): State<AppState>,
    Json(request): Json<IdNumberRequest>,
) -> Json<ValidateResponse> {
    let outcome = IdValidator::validate(request.id_number.trim());
    Json(ValidateResponse::from_outcome(&outcome))
}

/// Runs a search for a candidate ID number.
///
/// Gates on validation (the orchestrator never re-validates): an invalid
/// candidate is rejected with its inline message before any service call.
pub async fn search_id(
    State(state): State<AppState>,
    Json(request): Json<IdNumberRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let parsed = match IdValidator::validate(request.id_number.trim()) {
        ValidationOutcome::Valid(parsed) => parsed,
        ValidationOutcome::Invalid(reason) => {
            return Err(ApiError::Validation(reason.message().to_string()));
        }
    };

    let metadata = OperationMetadata::with_correlation_id(Uuid::new_v4().to_string())
        .with_context("source", "search-handler");

    let result = state
        .orchestrator
        .search(&parsed, Some(metadata))
        .await
        .map_err(|error| ApiError::Upstream(error.message().to_string()))?;

    Ok(Json(SearchResponse::from(result)))
}
