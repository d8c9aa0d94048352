//! Grid index mapper.
//!
//! Converts between `(section, item)` grid addresses and calendar days.
//! Section `n` is the n-th month after the month containing the minimum
//! date. Each section is laid out as a flat list of cells:
//!
//! ```text
//! [ 7 weekday labels ][ leading blanks ][ day 1 .. day N ]
//! ```
//!
//! The number of blanks is the weekday index (Sunday = 1) of the first of
//! the month minus one, so day 1 lands under its weekday label. The mapper
//! holds no selection state and every query is a pure function of the
//! bound and the calendar provider.

use chrono::{Datelike, NaiveDate};

use crate::models::bound::DateBound;
use crate::models::grid::{GridAddress, WEEKDAY_ROW_ITEMS};
use crate::services::calendar::{CalendarProvider, GregorianCalendar};
use crate::utils::date;

/// Weekday label shown when the calendar provider cannot name a weekday.
pub const FALLBACK_WEEKDAY_LABEL: &str = "E";

pub struct GridIndexMapper<C: CalendarProvider = GregorianCalendar> {
    bound: DateBound,
    calendar: C,
}

impl GridIndexMapper<GregorianCalendar> {
    pub fn gregorian(bound: DateBound) -> Self {
        Self::new(bound, GregorianCalendar::new())
    }
}

impl<C: CalendarProvider> GridIndexMapper<C> {
    pub fn new(bound: DateBound, calendar: C) -> Self {
        Self { bound, calendar }
    }

    pub fn bound(&self) -> &DateBound {
        &self.bound
    }

    pub fn set_bound(&mut self, bound: DateBound) {
        self.bound = bound;
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Months spanned by the bound, counting partial months at both ends.
    pub fn section_count(&self) -> usize {
        let months = date::month_difference(self.bound.minimum, self.bound.maximum);
        (months + 1).max(1) as usize
    }

    /// First day of the month shown in `section`.
    pub fn first_date_of_section(&self, section: usize) -> NaiveDate {
        let first = date::first_of_month(self.bound.minimum);
        // Sections past chrono's representable range pin to its last day
        date::add_months(first, section as i32).unwrap_or(NaiveDate::MAX)
    }

    /// Padding cells before day 1 of `section`.
    pub fn blank_count(&self, section: usize) -> usize {
        date::weekday_index(self.first_date_of_section(section)) as usize - 1
    }

    pub fn days_in_section(&self, section: usize) -> usize {
        date::days_in_month(self.first_date_of_section(section)) as usize
    }

    /// Item index of day 1 in `section`.
    pub fn first_day_item(&self, section: usize) -> usize {
        WEEKDAY_ROW_ITEMS + self.blank_count(section)
    }

    /// Cells in `section`: weekday row, blanks and one cell per day.
    pub fn item_count(&self, section: usize) -> usize {
        self.first_day_item(section) + self.days_in_section(section)
    }

    /// Calendar day shown at `address`.
    ///
    /// `None` for weekday labels, blanks, and addresses outside the grid.
    pub fn resolve_date(&self, address: GridAddress) -> Option<NaiveDate> {
        if address.section >= self.section_count() {
            return None;
        }
        let first_day_item = self.first_day_item(address.section);
        if address.item < first_day_item || address.item >= self.item_count(address.section) {
            return None;
        }
        let day_of_month = (address.item - first_day_item + 1) as u32;
        self.first_date_of_section(address.section).with_day(day_of_month)
    }

    /// Section whose month contains `day`, if it is part of the grid.
    pub fn section_of(&self, day: NaiveDate) -> Option<usize> {
        let section = date::month_difference(self.bound.minimum, day);
        if section < 0 || section as usize >= self.section_count() {
            return None;
        }
        Some(section as usize)
    }

    /// Inverse of [`resolve_date`](Self::resolve_date).
    pub fn address_of(&self, day: NaiveDate) -> Option<GridAddress> {
        let section = self.section_of(day)?;
        Some(self.address_in_section(section, day))
    }

    /// Address of `day` assuming it belongs to `section`.
    pub(crate) fn address_in_section(&self, section: usize, day: NaiveDate) -> GridAddress {
        let item = self.first_day_item(section) + day.day() as usize - 1;
        GridAddress::new(section, item)
    }

    /// Next date cell after `address`, moving into the following section
    /// once the current one is exhausted.
    pub fn next_day_address(&self, address: GridAddress) -> Option<GridAddress> {
        let next_item = address.item.max(self.first_day_item(address.section).saturating_sub(1)) + 1;
        if next_item < self.item_count(address.section) {
            return Some(GridAddress::new(address.section, next_item));
        }
        let next_section = address.section + 1;
        if next_section >= self.section_count() {
            return None;
        }
        Some(GridAddress::new(next_section, self.first_day_item(next_section)))
    }

    /// Walk date cells starting at `address` (inclusive when it is a date
    /// cell), skipping weekday labels and blanks.
    pub fn walk_from(&self, address: GridAddress) -> DayCells<'_, C> {
        let start = if self.resolve_date(address).is_some() {
            Some(address)
        } else {
            self.next_day_address(address)
        };
        DayCells {
            mapper: self,
            next: start,
        }
    }

    /// Single-letter weekday label for 1..=7 (Sunday = 1).
    pub fn weekday_label(&self, weekday_index: u32) -> String {
        match self.calendar.weekday_symbol(weekday_index) {
            Some(symbol) => symbol,
            None => {
                log::warn!(
                    "No weekday symbol for index {}; using \"{}\"",
                    weekday_index,
                    FALLBACK_WEEKDAY_LABEL
                );
                FALLBACK_WEEKDAY_LABEL.to_string()
            }
        }
    }

    /// "Month Year" header for `section`.
    pub fn month_label(&self, section: usize) -> String {
        self.calendar.month_label(self.first_date_of_section(section))
    }
}

/// Iterator over `(address, date)` for consecutive date cells.
pub struct DayCells<'a, C: CalendarProvider> {
    mapper: &'a GridIndexMapper<C>,
    next: Option<GridAddress>,
}

impl<C: CalendarProvider> Iterator for DayCells<'_, C> {
    type Item = (GridAddress, NaiveDate);

    fn next(&mut self) -> Option<Self::Item> {
        let address = self.next?;
        let day = self.mapper.resolve_date(address)?;
        self.next = self.mapper.next_day_address(address);
        Some((address, day))
    }
}
