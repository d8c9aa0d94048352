// Grid models
// Addressing and per-cell classification of the month-by-month grid

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of weekday-label pseudo-cells at the top of every section.
pub const WEEKDAY_ROW_ITEMS: usize = 7;

/// Cells per grid row.
pub const ITEMS_PER_ROW: usize = 7;

/// Location of a cell: `section` is the month offset from the minimum
/// date's month, `item` the index inside that month's flattened cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridAddress {
    pub section: usize,
    pub item: usize,
}

impl GridAddress {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// True for the seven weekday-label cells heading each section.
    pub fn is_weekday_header(&self) -> bool {
        self.item < WEEKDAY_ROW_ITEMS
    }

    /// Column within the 7-wide row (0 = Sunday).
    pub fn column(&self) -> usize {
        self.item % ITEMS_PER_ROW
    }
}

/// Which side of an in-range cell visually joins its neighbours when the
/// range wraps across a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeEdge {
    /// Joins on both sides
    None,
    /// First day of its month, joins from the right only
    MonthStart,
    /// Last day of its month, joins from the left only
    MonthEnd,
}

/// How a cell should be presented, derived from bounds, disabled days and
/// the current selection. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClassification {
    WeekdayHeader,
    Blank,
    Disabled,
    OutOfBound,
    /// Selected start; `closed_right` when an end date is also set
    RangeStart { closed_right: bool },
    /// Selected end, always joined on the left
    RangeEnd,
    /// Start and end fall on the same day
    RangeStartAndEnd,
    InRange(RangeEdge),
    Plain,
}

impl CellClassification {
    /// Whether a tap on a cell with this classification can change selection.
    pub fn is_selectable(&self) -> bool {
        !matches!(
            self,
            Self::WeekdayHeader | Self::Blank | Self::Disabled | Self::OutOfBound
        )
    }

    /// Whether the cell is drawn as a selected endpoint.
    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            Self::RangeStart { .. } | Self::RangeEnd | Self::RangeStartAndEnd
        )
    }
}

/// Everything a cell renderer needs for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellData {
    /// Weekday symbol for header cells, empty for blanks, day number otherwise
    pub label: String,
    pub classification: CellClassification,
    pub date: Option<NaiveDate>,
    pub column: usize,
}
