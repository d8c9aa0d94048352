// Date utility functions
// Day-granularity comparisons and civil-calendar arithmetic

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, TimeZone};

/// Collapse a point in time to its local calendar day.
pub fn to_day<Tz: TimeZone>(date: &DateTime<Tz>) -> NaiveDate {
    date.with_timezone(&Local).date_naive()
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

pub fn is_before(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 < date2
}

pub fn is_after(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 > date2
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn day_difference(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Whole calendar months between the months containing `from` and `to`.
///
/// Only year and month take part, so Jan 31 -> Feb 1 is one month and
/// Jan 1 -> Jan 31 is zero.
pub fn month_difference(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date` (28..=31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => day_difference(first, next) as u32,
        // Only reachable for the last representable month
        None => 31,
    }
}

/// Shift `date` by `months`, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years * 12)
}

/// Weekday of `date` as 1..=7 with Sunday = 1.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().number_from_sunday()
}
