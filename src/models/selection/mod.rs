// Selection model
// Start/end dates picked by the user

use chrono::NaiveDate;

use super::grid::GridAddress;

/// Current start/end selection.
///
/// When both ends are set, `start < end` (or `start == end` for a range of
/// one day) and no disabled day lies between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Option<NaiveDate>,
    /// Grid cell of `start`, used to walk the range cell by cell
    pub start_address: Option<GridAddress>,
    pub end: Option<NaiveDate>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Both ends chosen.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Restart the selection at `date`, dropping any end.
    pub fn reset_to(&mut self, date: NaiveDate, address: GridAddress) {
        self.start = Some(date);
        self.start_address = Some(address);
        self.end = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
