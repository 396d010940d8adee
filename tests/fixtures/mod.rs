// Test fixtures - reusable test data
// Provides consistent dates across all test files

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 15, 2024 (month starting on a Friday)
    pub fn mid_march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Mar 1, 2024
    pub fn march_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Returns Jan 31, 2024 (month end that overflows February)
    pub fn jan_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Returns Jan 31, 2025 (non-leap year)
    pub fn jan_31_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Every date of the month containing `date`.
pub fn whole_month(date: NaiveDate) -> Vec<NaiveDate> {
    use chrono::Datelike;
    (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), day))
        .collect()
}
