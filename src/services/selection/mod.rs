//! Start/end selection state machine.
//!
//! Consumes taps on grid cells and decides how the selection moves:
//!
//! - no start yet: the tapped day becomes the start
//! - start only: a later day becomes the end, unless the range would cross
//!   a disabled day (then the tap restarts the selection). Ranges longer
//!   than `max_selectable_range` days are clamped and a scroll hint is
//!   emitted for the clamped end cell
//! - start and end: the tap restarts the selection
//!
//! Taps on weekday labels, blanks, out-of-bound or disabled days are
//! absorbed without any notification.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::event::PickerEvent;
use crate::models::grid::{CellClassification, CellData, GridAddress, RangeEdge};
use crate::models::selection::Selection;
use crate::models::settings::PickerSettings;
use crate::services::calendar::{CalendarProvider, GregorianCalendar};
use crate::services::grid::GridIndexMapper;
use crate::utils::date;

pub struct SelectionStateMachine<C: CalendarProvider = GregorianCalendar> {
    mapper: GridIndexMapper<C>,
    disabled: HashSet<NaiveDate>,
    max_selectable_range: u32,
    selection: Selection,
}

impl<C: CalendarProvider> SelectionStateMachine<C> {
    pub fn new(mapper: GridIndexMapper<C>, disabled: HashSet<NaiveDate>, max_selectable_range: u32) -> Self {
        Self {
            mapper,
            disabled,
            max_selectable_range: max_selectable_range.max(1),
            selection: Selection::default(),
        }
    }

    /// Build a machine for `settings`, seeding any pre-selected dates.
    pub fn from_settings(settings: &PickerSettings, calendar: C) -> Self {
        let bound = settings.bound(calendar.today());
        let mapper = GridIndexMapper::new(bound, calendar);
        let mut machine = Self::new(
            mapper,
            settings.disabled_set(),
            settings.effective_max_selectable_range(),
        );
        machine.seed(settings.selected_start_date, settings.selected_end_date);
        machine
    }

    /// Replace bounds, disabled days and range limit, resetting the
    /// selection to the settings' pre-seed.
    pub fn apply_settings(&mut self, settings: &PickerSettings) {
        let bound = settings.bound(self.mapper.calendar().today());
        log::info!(
            "Applying picker settings: {} to {}, {} disabled day(s), max range {}",
            bound.minimum,
            bound.maximum,
            settings.disabled_dates.len(),
            settings.max_selectable_range
        );
        self.mapper.set_bound(bound);
        self.disabled = settings.disabled_set();
        self.max_selectable_range = settings.effective_max_selectable_range();
        self.seed(settings.selected_start_date, settings.selected_end_date);
    }

    /// Set the selection directly, bypassing tap validation.
    pub fn seed(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.selection = Selection {
            start,
            start_address: start.and_then(|day| self.mapper.address_of(day)),
            end,
        };
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mapper(&self) -> &GridIndexMapper<C> {
        &self.mapper
    }

    pub fn max_selectable_range(&self) -> u32 {
        self.max_selectable_range
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.disabled.contains(&day)
    }

    /// In bound and not disabled.
    pub fn is_selectable(&self, day: NaiveDate) -> bool {
        self.mapper.bound().contains(day) && !self.is_disabled(day)
    }

    /// Apply a tap on `address` and return the notifications it produced.
    ///
    /// An empty list means the tap was absorbed.
    pub fn handle_tap(&mut self, address: GridAddress) -> Vec<PickerEvent> {
        let Some(day) = self.mapper.resolve_date(address) else {
            log::debug!("Ignoring tap on non-date cell {:?}", address);
            return Vec::new();
        };
        if !self.mapper.bound().contains(day) {
            log::debug!("Ignoring tap on {} outside the selectable bound", day);
            return Vec::new();
        }
        if self.is_disabled(day) {
            log::debug!("Ignoring tap on disabled day {}", day);
            return Vec::new();
        }

        let mut events = Vec::with_capacity(3);
        match (self.selection.start, self.selection.end) {
            (Some(start), None) => {
                if !date::is_after(day, start) || self.crosses_disabled_day(start, day) {
                    log::debug!("Restarting selection at {} (was {})", day, start);
                    self.selection.reset_to(day, address);
                    events.push(PickerEvent::StartSelected(day));
                } else if date::day_difference(start, day) + 1 > i64::from(self.max_selectable_range) {
                    let end = self.max_selectable_date().unwrap_or(day);
                    log::info!(
                        "Range {} to {} exceeds {} days; clamping end to {}",
                        start,
                        day,
                        self.max_selectable_range,
                        end
                    );
                    self.selection.end = Some(end);
                    events.push(PickerEvent::EndSelected(end));
                    if let Some(target) = self.max_selectable_address() {
                        events.push(PickerEvent::ScrollToAddress(target));
                    }
                } else {
                    log::debug!("End selected at {}", day);
                    self.selection.end = Some(day);
                    events.push(PickerEvent::EndSelected(day));
                }
            }
            _ => {
                // No start yet, or a finished range being replaced
                log::debug!("Start selected at {}", day);
                self.selection.reset_to(day, address);
                events.push(PickerEvent::StartSelected(day));
            }
        }
        events.push(PickerEvent::Refresh);
        events
    }

    /// Whether any disabled day lies between `start` and `end`.
    ///
    /// Walks the grid from the start cell; a start outside the grid is
    /// walked day by day instead.
    fn crosses_disabled_day(&self, start: NaiveDate, end: NaiveDate) -> bool {
        match self.selection.start_address {
            Some(address) => self
                .mapper
                .walk_from(address)
                .map(|(_, day)| day)
                .take_while(|day| date::is_before(*day, end))
                .any(|day| self.is_disabled(day)),
            None => start
                .iter_days()
                .take_while(|day| date::is_before(*day, end))
                .any(|day| self.is_disabled(day)),
        }
    }

    /// Latest end date the current start allows.
    pub fn max_selectable_date(&self) -> Option<NaiveDate> {
        let start = self.selection.start?;
        date::add_days(start, i64::from(self.max_selectable_range) - 1)
    }

    /// Grid address of [`max_selectable_date`](Self::max_selectable_date),
    /// located by counting months forward from the start cell's section.
    pub fn max_selectable_address(&self) -> Option<GridAddress> {
        let start = self.selection.start?;
        let max_date = self.max_selectable_date()?;
        let start_section = match self.selection.start_address {
            Some(address) => address.section,
            None => self.mapper.section_of(start)?,
        };
        let offset = date::month_difference(start, max_date);
        let section = usize::try_from(start_section as i64 + i64::from(offset)).ok()?;
        if section >= self.mapper.section_count() {
            return None;
        }
        Some(self.mapper.address_in_section(section, max_date))
    }

    /// Presentation class of the cell at `address` under the current state.
    pub fn classify(&self, address: GridAddress) -> CellClassification {
        if address.is_weekday_header() {
            return CellClassification::WeekdayHeader;
        }
        match self.mapper.resolve_date(address) {
            Some(day) => self.classify_date(day),
            None => CellClassification::Blank,
        }
    }

    fn classify_date(&self, day: NaiveDate) -> CellClassification {
        if !self.mapper.bound().contains(day) {
            return CellClassification::OutOfBound;
        }
        if self.is_disabled(day) {
            return CellClassification::Disabled;
        }

        let Selection { start, end, .. } = self.selection;
        if let (Some(start), Some(end)) = (start, end) {
            if date::is_before(start, day) && date::is_before(day, end) {
                let edge = if day.day() == 1 {
                    RangeEdge::MonthStart
                } else if day.day() == date::days_in_month(day) {
                    RangeEdge::MonthEnd
                } else {
                    RangeEdge::None
                };
                return CellClassification::InRange(edge);
            }
        }

        match (start, end) {
            (Some(start), Some(end)) if date::is_same_day(day, start) && date::is_same_day(day, end) => {
                CellClassification::RangeStartAndEnd
            }
            (Some(start), end) if date::is_same_day(day, start) => CellClassification::RangeStart {
                closed_right: end.is_some(),
            },
            (_, Some(end)) if date::is_same_day(day, end) => CellClassification::RangeEnd,
            _ => CellClassification::Plain,
        }
    }

    /// Label, classification and date for one cell.
    pub fn cell_data(&self, address: GridAddress) -> CellData {
        let date = self.mapper.resolve_date(address);
        let label = if address.is_weekday_header() {
            self.mapper.weekday_label(address.item as u32 + 1)
        } else {
            date.map(|day| day.day().to_string()).unwrap_or_default()
        };
        CellData {
            label,
            classification: self.classify(address),
            date,
            column: address.column(),
        }
    }
}
