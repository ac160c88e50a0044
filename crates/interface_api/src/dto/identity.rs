//! Identity DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_identity::{
    Holiday, InvalidReason, LookupResult, ParsedId, ValidationOutcome,
};

/// Body for both the validate and search operations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdNumberRequest {
    pub id_number: String,
}

/// Fields decoded from a valid ID number.
///
/// The hints are client-side conveniences; the search result remains the
/// authority on the decoded profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedId {
    pub birth_year_two_digit: u8,
    pub birth_month: u8,
    pub birth_day: u8,
    pub gender_hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship_hint: Option<String>,
}

impl From<&ParsedId> for DecodedId {
    fn from(parsed: &ParsedId) -> Self {
        Self {
            birth_year_two_digit: parsed.birth_year_two_digit(),
            birth_month: parsed.birth_month(),
            birth_day: parsed.birth_day(),
            gender_hint: parsed.gender_hint().to_string(),
            citizenship_hint: parsed.citizenship_hint().map(|hint| {
                match hint {
                    domain_identity::CitizenshipHint::Citizen => "citizen".to_string(),
                    domain_identity::CitizenshipHint::PermanentResident => {
                        "permanent_resident".to_string()
                    }
                }
            }),
        }
    }
}

/// Outcome of validating a candidate.
///
/// Validation failure is data, not an HTTP error: the response is always
/// 200 and carries the reason plus its inline message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<DecodedId>,
}

impl ValidateResponse {
    /// Projects a validation outcome into the response shape.
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid(parsed) => Self {
                valid: true,
                reason: None,
                message: None,
                decoded: Some(DecodedId::from(parsed)),
            },
            ValidationOutcome::Invalid(reason) => Self {
                valid: false,
                reason: Some(*reason),
                message: Some(reason.message().to_string()),
                decoded: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HolidayDto {
    pub date: NaiveDate,
    pub name: String,
}

impl From<Holiday> for HolidayDto {
    fn from(holiday: Holiday) -> Self {
        Self {
            date: holiday.date,
            name: holiday.name,
        }
    }
}

/// Completed search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub dob: NaiveDate,
    pub gender: String,
    pub citizen: bool,
    pub holidays: Vec<HolidayDto>,
}

impl From<LookupResult> for SearchResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            dob: result.date_of_birth,
            gender: result.gender,
            citizen: result.is_citizen,
            holidays: result.holidays.into_iter().map(HolidayDto::from).collect(),
        }
    }
}
