//! Parsed ID number value object
//!
//! A [`ParsedId`] exists only as the product of successful validation; there
//! is no way to construct one from an arbitrary string. It carries the raw 13
//! digits (the external service receives the original string, not the
//! decomposed fields) plus the fields sliced out of it during validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender encoded in the sequence digits of an ID number.
///
/// Display hint only - the external processing service remains the authority
/// on the decoded profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderHint {
    Female,
    Male,
}

impl fmt::Display for GenderHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderHint::Female => write!(f, "female"),
            GenderHint::Male => write!(f, "male"),
        }
    }
}

/// Citizenship status encoded in digit 10 of an ID number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitizenshipHint {
    Citizen,
    PermanentResident,
}

/// A structurally valid, checksum-verified 13-digit ID number.
///
/// Produced exclusively by [`crate::validation::IdValidator::validate`]. The
/// birth-date fields are the raw slices from the digit string; the two-digit
/// year is deliberately not expanded to a century (the lookup service decides
/// that).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedId {
    digits: String,
    birth_year_two_digit: u8,
    birth_month: u8,
    birth_day: u8,
    check_digit: u8,
}

impl ParsedId {
    /// Assembles a parsed ID from pre-validated parts.
    ///
    /// Callers must have already established the invariants: `digits` is
    /// exactly 13 ASCII decimal digits and the sliced fields match it.
    pub(crate) fn from_validated(
        digits: String,
        birth_year_two_digit: u8,
        birth_month: u8,
        birth_day: u8,
        check_digit: u8,
    ) -> Self {
        debug_assert_eq!(digits.len(), 13);
        Self {
            digits,
            birth_year_two_digit,
            birth_month,
            birth_day,
            check_digit,
        }
    }

    /// The original 13-digit string, as submitted to the lookup service.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Birth year as the two digits embedded in positions [0,2).
    pub fn birth_year_two_digit(&self) -> u8 {
        self.birth_year_two_digit
    }

    /// Birth month from positions [2,4), guaranteed in 1..=12.
    pub fn birth_month(&self) -> u8 {
        self.birth_month
    }

    /// Birth day from positions [4,6), guaranteed in 1..=31.
    ///
    /// The bound is deliberately coarse: the day is not checked against the
    /// month's actual length or leap years.
    pub fn birth_day(&self) -> u8 {
        self.birth_day
    }

    /// The trailing check digit at position 12.
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Gender encoded in the sequence digits [6,10): 0000-4999 female,
    /// 5000-9999 male.
    pub fn gender_hint(&self) -> GenderHint {
        let sequence = self.digits.as_bytes()[6..10]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        if sequence < 5000 {
            GenderHint::Female
        } else {
            GenderHint::Male
        }
    }

    /// Citizenship encoded in digit 10: `0` citizen, `1` permanent resident.
    ///
    /// Returns `None` for any other digit - the format reserves them.
    pub fn citizenship_hint(&self) -> Option<CitizenshipHint> {
        match self.digits.as_bytes()[10] {
            b'0' => Some(CitizenshipHint::Citizen),
            b'1' => Some(CitizenshipHint::PermanentResident),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IdValidator;

    fn parse(candidate: &str) -> ParsedId {
        IdValidator::validate(candidate)
            .into_parsed()
            .expect("fixture must validate")
    }

    #[test]
    fn test_sliced_fields() {
        let id = parse("8001015009087");
        assert_eq!(id.digits(), "8001015009087");
        assert_eq!(id.birth_year_two_digit(), 80);
        assert_eq!(id.birth_month(), 1);
        assert_eq!(id.birth_day(), 1);
        assert_eq!(id.check_digit(), 7);
    }

    #[test]
    fn test_gender_hint() {
        assert_eq!(parse("8001015009087").gender_hint(), GenderHint::Male);
        assert_eq!(parse("9202204720083").gender_hint(), GenderHint::Female);
    }

    #[test]
    fn test_citizenship_hint() {
        assert_eq!(
            parse("8001015009087").citizenship_hint(),
            Some(CitizenshipHint::Citizen)
        );
        assert_eq!(
            parse("9001014001183").citizenship_hint(),
            Some(CitizenshipHint::PermanentResident)
        );
    }

    #[test]
    fn test_display_is_original_digits() {
        let id = parse("2001014800086");
        assert_eq!(id.to_string(), "2001014800086");
    }
}
