//! Date range picker façade.
//!
//! Wraps the selection machine behind a data-source interface a host grid
//! can render from, and fans notifications out to registered observers.

use chrono::NaiveDate;

use crate::models::event::PickerEvent;
use crate::models::grid::{CellData, GridAddress};
use crate::models::selection::Selection;
use crate::models::settings::{PickerSettings, PickerStyle};
use crate::services::calendar::{CalendarProvider, GregorianCalendar};
use crate::services::selection::SelectionStateMachine;

/// What a host grid needs to lay out and draw the picker.
pub trait GridDataSource {
    fn section_count(&self) -> usize;
    fn item_count(&self, section: usize) -> usize;
    /// Header title of a section ("Month Year").
    fn section_title(&self, section: usize) -> String;
    fn cell_data(&self, address: GridAddress) -> CellData;
}

/// Callback receiving every notification the picker emits.
pub type PickerObserver = Box<dyn FnMut(&PickerEvent)>;

pub struct DateRangePicker<C: CalendarProvider = GregorianCalendar> {
    machine: SelectionStateMachine<C>,
    style: PickerStyle,
    observers: Vec<PickerObserver>,
}

impl DateRangePicker<GregorianCalendar> {
    pub fn new(settings: &PickerSettings) -> Self {
        Self::with_calendar(settings, GregorianCalendar::new())
    }
}

impl<C: CalendarProvider> DateRangePicker<C> {
    pub fn with_calendar(settings: &PickerSettings, calendar: C) -> Self {
        Self {
            machine: SelectionStateMachine::from_settings(settings, calendar),
            style: settings.style.clone(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for all subsequent notifications.
    pub fn subscribe(&mut self, observer: impl FnMut(&PickerEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Re-apply configuration. The selection is reset to the settings'
    /// pre-seed and observers are asked to refresh.
    pub fn configure(&mut self, settings: &PickerSettings) {
        self.machine.apply_settings(settings);
        self.style = settings.style.clone();
        self.emit(&[PickerEvent::Refresh]);
    }

    /// Handle a tap on `address`, notify observers, and return the events.
    pub fn tap(&mut self, address: GridAddress) -> Vec<PickerEvent> {
        let events = self.machine.handle_tap(address);
        self.emit(&events);
        events
    }

    /// Tap the cell showing `day`. Days outside the grid are absorbed.
    pub fn tap_date(&mut self, day: NaiveDate) -> Vec<PickerEvent> {
        match self.machine.mapper().address_of(day) {
            Some(address) => self.tap(address),
            None => {
                log::debug!("No grid cell shows {}; ignoring tap", day);
                Vec::new()
            }
        }
    }

    /// Report the current selection as accepted ("Done").
    pub fn confirm(&mut self) -> PickerEvent {
        let Selection { start, end, .. } = *self.machine.selection();
        let event = PickerEvent::Confirmed { start, end };
        self.emit(&[event]);
        event
    }

    /// Report the picker as dismissed ("Cancel").
    pub fn cancel(&mut self) -> PickerEvent {
        let Selection { start, end, .. } = *self.machine.selection();
        let event = PickerEvent::Cancelled { start, end };
        self.emit(&[event]);
        event
    }

    pub fn selection(&self) -> &Selection {
        self.machine.selection()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.machine.selection().start
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.machine.selection().end
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    pub fn machine(&self) -> &SelectionStateMachine<C> {
        &self.machine
    }

    fn emit(&mut self, events: &[PickerEvent]) {
        for event in events {
            for observer in self.observers.iter_mut() {
                observer(event);
            }
        }
    }
}

impl<C: CalendarProvider> GridDataSource for DateRangePicker<C> {
    fn section_count(&self) -> usize {
        self.machine.mapper().section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        self.machine.mapper().item_count(section)
    }

    fn section_title(&self, section: usize) -> String {
        self.machine.mapper().month_label(section)
    }

    fn cell_data(&self, address: GridAddress) -> CellData {
        self.machine.cell_data(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::CellClassification;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn q1_settings() -> PickerSettings {
        PickerSettings::default().with_bounds(ymd(2024, 1, 1), ymd(2024, 3, 31))
    }

    fn recording(picker: &mut DateRangePicker) -> Rc<RefCell<Vec<PickerEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        picker.subscribe(move |event| sink.borrow_mut().push(*event));
        log
    }

    #[test]
    fn test_observers_receive_tap_events() {
        let mut picker = DateRangePicker::new(&q1_settings());
        let log = recording(&mut picker);

        picker.tap_date(ymd(2024, 1, 10));
        assert_eq!(
            *log.borrow(),
            vec![PickerEvent::StartSelected(ymd(2024, 1, 10)), PickerEvent::Refresh]
        );
    }

    #[test]
    fn test_absorbed_tap_notifies_nobody() {
        let mut picker = DateRangePicker::new(&q1_settings());
        let log = recording(&mut picker);

        assert!(picker.tap(GridAddress::new(0, 2)).is_empty());
        assert!(picker.tap_date(ymd(2025, 1, 1)).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_confirm_and_cancel_report_selection() {
        let mut picker = DateRangePicker::new(&q1_settings());
        picker.tap_date(ymd(2024, 1, 10));
        picker.tap_date(ymd(2024, 1, 15));

        assert_eq!(
            picker.confirm(),
            PickerEvent::Confirmed {
                start: Some(ymd(2024, 1, 10)),
                end: Some(ymd(2024, 1, 15)),
            }
        );
        assert_eq!(
            picker.cancel(),
            PickerEvent::Cancelled {
                start: Some(ymd(2024, 1, 10)),
                end: Some(ymd(2024, 1, 15)),
            }
        );
        assert!(picker.selection().is_complete());
    }

    #[test]
    fn test_configure_resets_selection_and_refreshes() {
        let mut picker = DateRangePicker::new(&q1_settings());
        picker.tap_date(ymd(2024, 1, 10));
        let log = recording(&mut picker);

        let settings = q1_settings().with_selection(Some(ymd(2024, 2, 1)), Some(ymd(2024, 2, 5)));
        picker.configure(&settings);

        assert_eq!(picker.start_date(), Some(ymd(2024, 2, 1)));
        assert_eq!(picker.end_date(), Some(ymd(2024, 2, 5)));
        assert_eq!(*log.borrow(), vec![PickerEvent::Refresh]);
    }

    #[test]
    fn test_data_source_dimensions() {
        let picker = DateRangePicker::new(&q1_settings());
        assert_eq!(picker.section_count(), 3);
        assert_eq!(picker.item_count(1), 7 + 4 + 29);
        assert_eq!(picker.section_title(1), "February 2024");
        assert_eq!(
            picker.cell_data(GridAddress::new(0, 0)).classification,
            CellClassification::WeekdayHeader
        );
    }

    #[test]
    fn test_style_follows_settings() {
        let mut style = PickerStyle::default();
        style.title_text = "Select Date Range".to_string();
        let picker = DateRangePicker::new(&q1_settings().with_style(style));
        assert_eq!(picker.style().title_text, "Select Date Range");
    }
}
