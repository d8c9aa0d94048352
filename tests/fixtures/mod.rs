// Test fixtures - reusable test data
// Provides consistent bounds and pickers across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use date_range_picker::services::calendar::GregorianCalendar;
use date_range_picker::{DateRangePicker, PickerSettings};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Jan 1, 2024 (a Monday)
    pub fn q1_start() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Mar 31, 2024
    pub fn q1_end() -> NaiveDate {
        ymd(2024, 3, 31)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Settings bounded to the first quarter of 2024
pub fn q1_settings() -> PickerSettings {
    PickerSettings::default().with_bounds(dates::q1_start(), dates::q1_end())
}

/// Picker over Q1 2024 whose "today" is pinned to Jan 1, 2024
pub fn q1_picker(settings: &PickerSettings) -> DateRangePicker {
    DateRangePicker::with_calendar(settings, GregorianCalendar::with_today(dates::q1_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::q1_start().weekday(), chrono::Weekday::Mon);
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert!(dates::q1_start() < dates::q1_end());
    }
}
