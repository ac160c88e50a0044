//! Test Data Builders
//!
//! Builder patterns for constructing lookup responses with sensible
//! defaults, so tests specify only the fields they care about.

use chrono::NaiveDate;

use domain_identity::{HolidayRecord, LookupResponse};

use crate::fixtures::HOLIDAYS_1980;

/// Builder for canned lookup responses.
pub struct LookupResponseBuilder {
    dob: NaiveDate,
    gender: String,
    citizen: bool,
    holidays: Vec<HolidayRecord>,
}

impl Default for LookupResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupResponseBuilder {
    /// Creates a builder with default values: a male citizen born on
    /// 1 January 1980 with that year's holidays.
    pub fn new() -> Self {
        Self {
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            gender: "Male".to_string(),
            citizen: true,
            holidays: HOLIDAYS_1980.clone(),
        }
    }

    /// Sets the date of birth
    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = dob;
        self
    }

    /// Sets the gender string
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the citizenship flag
    pub fn with_citizen(mut self, citizen: bool) -> Self {
        self.citizen = citizen;
        self
    }

    /// Replaces the holiday list
    pub fn with_holidays(mut self, holidays: Vec<HolidayRecord>) -> Self {
        self.holidays = holidays;
        self
    }

    /// Appends one holiday
    pub fn with_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.holidays.push(HolidayRecord {
            date,
            name: name.into(),
        });
        self
    }

    /// Builds the response
    pub fn build(self) -> LookupResponse {
        LookupResponse {
            dob: self.dob,
            gender: self.gender,
            citizen: self.citizen,
            holidays: self.holidays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let response = LookupResponseBuilder::new().build();
        assert_eq!(response.gender, "Male");
        assert!(response.citizen);
        assert_eq!(response.holidays.len(), 3);
    }

    #[test]
    fn test_builder_overrides() {
        let response = LookupResponseBuilder::new()
            .with_gender("Female")
            .with_citizen(false)
            .with_holidays(vec![])
            .with_holiday(NaiveDate::from_ymd_opt(1992, 6, 16).unwrap(), "Youth Day")
            .build();

        assert_eq!(response.gender, "Female");
        assert!(!response.citizen);
        assert_eq!(response.holidays.len(), 1);
        assert_eq!(response.holidays[0].name, "Youth Day");
    }
}
