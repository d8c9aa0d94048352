//! Calendar provider collaborator.
//!
//! Supplies "today" and the localised names the grid shows. Day arithmetic
//! itself is plain civil-calendar math in [`crate::utils::date`].

use chrono::{NaiveDate, Weekday};

use crate::utils::date;

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Localised calendar lookups consumed by the grid mapper.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarProvider {
    /// The current calendar day.
    fn today(&self) -> NaiveDate;

    /// Narrow weekday symbol for `weekday_index` in 1..=7 (Sunday = 1).
    /// `None` when the lookup fails.
    fn weekday_symbol(&self, weekday_index: u32) -> Option<String>;

    /// "Month Year" title for the month containing `date`.
    fn month_label(&self, date: NaiveDate) -> String;
}

/// Proleptic Gregorian calendar with English names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar {
    fixed_today: Option<NaiveDate>,
}

impl GregorianCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calendar whose "today" never moves, for reproducible grids.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            fixed_today: Some(today),
        }
    }
}

impl CalendarProvider for GregorianCalendar {
    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(date::today)
    }

    fn weekday_symbol(&self, weekday_index: u32) -> Option<String> {
        let weekday = WEEKDAYS_FROM_SUNDAY.get(weekday_index.checked_sub(1)? as usize)?;
        weekday.to_string().chars().next().map(String::from)
    }

    fn month_label(&self, date: NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }
}
