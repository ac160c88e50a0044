//! Test Fixtures
//!
//! Pre-computed ID number vectors and canned holiday data. Every "valid"
//! vector here carries a correct modulus-10 check digit; the invalid ones
//! each fail exactly one validation step.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use domain_identity::HolidayRecord;

/// Checksum-verified and deliberately broken ID number vectors.
pub struct IdFixtures;

impl IdFixtures {
    /// Male citizen, born 1 January 1980
    pub const MALE_CITIZEN: &'static str = "8001015009087";

    /// Female citizen, born 20 February 1992
    pub const FEMALE_CITIZEN: &'static str = "9202204720083";

    /// Female permanent resident, born 1 January 1990
    pub const PERMANENT_RESIDENT: &'static str = "9001014001183";

    /// Valid vector with a year-2000 birth date
    pub const BORN_2000: &'static str = "2001014800086";

    /// Too short: fails the length check
    pub const TOO_SHORT: &'static str = "123";

    /// Thirteen zeroes: passes length, charset, and (vacuously) checksum,
    /// but the embedded month is 00
    pub const ALL_ZEROES: &'static str = "0000000000000";

    /// Returns the given ID with its check digit flipped, which must fail
    /// the checksum step and nothing earlier.
    pub fn with_flipped_check_digit(id_number: &str) -> String {
        let (head, tail) = id_number.split_at(id_number.len() - 1);
        let check: u8 = tail.parse().expect("fixture ends in a digit");
        format!("{head}{}", (check + 1) % 10)
    }
}

/// Public holidays of 1980, as the lookup service would return them.
pub static HOLIDAYS_1980: Lazy<Vec<HolidayRecord>> = Lazy::new(|| {
    vec![
        HolidayRecord {
            date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            name: "New Year's Day".to_string(),
        },
        HolidayRecord {
            date: NaiveDate::from_ymd_opt(1980, 4, 4).unwrap(),
            name: "Good Friday".to_string(),
        },
        HolidayRecord {
            date: NaiveDate::from_ymd_opt(1980, 12, 25).unwrap(),
            name: "Christmas Day".to_string(),
        },
    ]
});
