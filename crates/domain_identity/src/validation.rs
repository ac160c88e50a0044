//! ID number validation rules
//!
//! This module implements the decode/validate pipeline for 13-digit South
//! African ID numbers.
//!
//! # Validation Pipeline
//!
//! Checks run in a fixed precedence order and short-circuit on the first
//! failure, so exactly one reason is ever reported:
//!
//! 1. Length: exactly 13 characters
//! 2. Charset: every character an ASCII decimal digit
//! 3. Month: positions [2,4) in 1..=12
//! 4. Day: positions [4,6) in 1..=31 (coarse bound, not calendar-aware)
//! 5. Checksum: modulus-10 check digit over the first 12 digits
//!
//! The validator is pure and allocation-light; it is safe to call on every
//! keystroke. Callers trim surrounding whitespace before validating - the
//! validator itself does not.

use serde::{Deserialize, Serialize};

use crate::id_number::ParsedId;

/// The single reason a candidate failed validation.
///
/// Exactly one reason applies per candidate: checks short-circuit in the
/// precedence order documented on [`IdValidator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// The candidate is not exactly 13 characters long
    WrongLength,
    /// The candidate is 13 characters but contains a non-digit
    NonDigitCharacter,
    /// The embedded birth month is outside 1..=12
    InvalidMonth,
    /// The embedded birth day is outside 1..=31
    InvalidDay,
    /// The trailing check digit does not match the computed one
    ChecksumMismatch,
}

impl InvalidReason {
    /// The inline message shown next to the input field.
    ///
    /// Rendered by the presentation layer only while the candidate is
    /// non-empty.
    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::WrongLength => "ID number must be exactly 13 digits",
            InvalidReason::NonDigitCharacter => "ID number may only contain digits",
            InvalidReason::InvalidMonth => "ID number has an invalid birth month",
            InvalidReason::InvalidDay => "ID number has an invalid birth day",
            InvalidReason::ChecksumMismatch => "ID number failed the check digit validation",
        }
    }
}

/// Outcome of validating a candidate ID number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The candidate passed every check; the parsed fields are populated
    Valid(ParsedId),
    /// The candidate failed; exactly the first failing reason is reported
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    /// True when the candidate passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// The parsed ID, when valid.
    pub fn parsed(&self) -> Option<&ParsedId> {
        match self {
            ValidationOutcome::Valid(parsed) => Some(parsed),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// Consumes the outcome, yielding the parsed ID when valid.
    pub fn into_parsed(self) -> Option<ParsedId> {
        match self {
            ValidationOutcome::Valid(parsed) => Some(parsed),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// The failure reason, when invalid.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(reason) => Some(*reason),
        }
    }
}

/// Validator for candidate ID numbers.
///
/// # Examples
///
/// ```rust
/// use domain_identity::validation::{IdValidator, InvalidReason};
///
/// assert!(IdValidator::validate("2001014800086").is_valid());
/// assert_eq!(
///     IdValidator::validate("123").reason(),
///     Some(InvalidReason::WrongLength),
/// );
/// ```
pub struct IdValidator;

impl IdValidator {
    /// Validates a candidate string.
    ///
    /// The caller must already have trimmed surrounding whitespace. Each
    /// check aborts the pipeline on failure; later checks are never
    /// evaluated once an earlier one fails.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The candidate ID number, whitespace already stripped
    ///
    /// # Returns
    ///
    /// `Valid(ParsedId)` or `Invalid(reason)` with the first failing reason
    pub fn validate(candidate: &str) -> ValidationOutcome {
        // Length is counted in characters, not bytes, so a 13-character
        // candidate containing a multi-byte character still reaches the
        // charset check.
        if candidate.chars().count() != 13 {
            return ValidationOutcome::Invalid(InvalidReason::WrongLength);
        }

        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return ValidationOutcome::Invalid(InvalidReason::NonDigitCharacter);
        }

        // All ASCII digits from here on; byte slicing is character slicing.
        let digits: Vec<u8> = candidate.bytes().map(|b| b - b'0').collect();

        let birth_month = digits[2] * 10 + digits[3];
        if !(1..=12).contains(&birth_month) {
            return ValidationOutcome::Invalid(InvalidReason::InvalidMonth);
        }

        // Coarse bound: not checked against the month's length or leap years.
        let birth_day = digits[4] * 10 + digits[5];
        if !(1..=31).contains(&birth_day) {
            return ValidationOutcome::Invalid(InvalidReason::InvalidDay);
        }

        if Self::expected_check_digit(&digits[..12]) != digits[12] {
            return ValidationOutcome::Invalid(InvalidReason::ChecksumMismatch);
        }

        let birth_year_two_digit = digits[0] * 10 + digits[1];
        ValidationOutcome::Valid(ParsedId::from_validated(
            candidate.to_string(),
            birth_year_two_digit,
            birth_month,
            birth_day,
            digits[12],
        ))
    }

    /// Computes the expected check digit over the first 12 digits.
    ///
    /// Modulus-10 (Luhn variant): 0-indexed even positions contribute the
    /// digit as-is; odd positions contribute double the digit, minus 9 when
    /// the doubled value exceeds 9.
    fn expected_check_digit(digits: &[u8]) -> u8 {
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(position, &digit)| {
                let digit = u32::from(digit);
                if position % 2 == 0 {
                    digit
                } else {
                    let doubled = digit * 2;
                    if doubled > 9 {
                        doubled - 9
                    } else {
                        doubled
                    }
                }
            })
            .sum();
        ((10 - (sum % 10)) % 10) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_vectors() {
        for candidate in [
            "2001014800086",
            "8001015009087",
            "9202204720083",
            "7501015800089",
        ] {
            let outcome = IdValidator::validate(candidate);
            assert!(outcome.is_valid(), "{candidate} should validate");
        }
    }

    #[test]
    fn test_wrong_length() {
        for candidate in ["", "123", "200101480008", "20010148000866"] {
            assert_eq!(
                IdValidator::validate(candidate).reason(),
                Some(InvalidReason::WrongLength),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn test_non_digit_after_length() {
        // 13 characters with a non-digit takes the charset path, not length
        assert_eq!(
            IdValidator::validate("200101480008x").reason(),
            Some(InvalidReason::NonDigitCharacter)
        );
        assert_eq!(
            IdValidator::validate("2001-14800086").reason(),
            Some(InvalidReason::NonDigitCharacter)
        );
    }

    #[test]
    fn test_multibyte_character_counts_as_one() {
        // 13 characters, 14 bytes: must reach the charset check
        let candidate = "200101480008é";
        assert_eq!(candidate.chars().count(), 13);
        assert_eq!(
            IdValidator::validate(candidate).reason(),
            Some(InvalidReason::NonDigitCharacter)
        );
    }

    #[test]
    fn test_invalid_month_beats_checksum() {
        // Check digit is correct for both; the month check fires first
        assert_eq!(
            IdValidator::validate("0000000000000").reason(),
            Some(InvalidReason::InvalidMonth)
        );
        assert_eq!(
            IdValidator::validate("9913014800085").reason(),
            Some(InvalidReason::InvalidMonth)
        );
    }

    #[test]
    fn test_invalid_day() {
        // Valid month, day 32, checksum would pass
        assert_eq!(
            IdValidator::validate("2001324800081").reason(),
            Some(InvalidReason::InvalidDay)
        );
        // Day 00
        assert_eq!(
            IdValidator::validate("2001004800086").reason(),
            Some(InvalidReason::InvalidDay)
        );
    }

    #[test]
    fn test_day_31_in_short_month_is_accepted() {
        // Deliberately lenient: February 31 passes the coarse day bound.
        let outcome = IdValidator::validate("8002315009082");
        assert_eq!(outcome.reason(), None);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_checksum_mismatch_on_flipped_digit() {
        assert_eq!(
            IdValidator::validate("2001014800087").reason(),
            Some(InvalidReason::ChecksumMismatch)
        );
        assert_eq!(
            IdValidator::validate("8001015009080").reason(),
            Some(InvalidReason::ChecksumMismatch)
        );
    }

    #[test]
    fn test_idempotent() {
        let first = IdValidator::validate("2001014800086");
        let second = IdValidator::validate("2001014800086");
        assert_eq!(first, second);

        let first = IdValidator::validate("not-an-id");
        let second = IdValidator::validate("not-an-id");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parsed_fields_populated() {
        let parsed = IdValidator::validate("9202204720083")
            .into_parsed()
            .unwrap();
        assert_eq!(parsed.birth_year_two_digit(), 92);
        assert_eq!(parsed.birth_month(), 2);
        assert_eq!(parsed.birth_day(), 20);
        assert_eq!(parsed.check_digit(), 3);
    }

    #[test]
    fn test_does_not_trim() {
        // Trimming is the caller's job; surrounding whitespace fails length
        assert_eq!(
            IdValidator::validate(" 2001014800086 ").reason(),
            Some(InvalidReason::WrongLength)
        );
    }

    #[test]
    fn test_inline_messages() {
        assert_eq!(
            InvalidReason::WrongLength.message(),
            "ID number must be exactly 13 digits"
        );
        assert!(!InvalidReason::ChecksumMismatch.message().is_empty());
    }
}
