// Picker events
// Notifications emitted to the host application

use chrono::NaiveDate;

use super::grid::GridAddress;

/// Semantic notifications from the picker to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Start date changed
    StartSelected(NaiveDate),
    /// End date changed, including when it was clamped to the maximum span
    EndSelected(NaiveDate),
    /// Hint to bring a cell into view after a clamp
    ScrollToAddress(GridAddress),
    /// Visible cells should be classified again
    Refresh,
    /// Host confirmed the current selection ("Done")
    Confirmed {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// Host dismissed the picker ("Cancel")
    Cancelled {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}
