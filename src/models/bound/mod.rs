// Date bound model
// Inclusive calendar-day limits of the picker grid

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date;

/// Years added to the minimum date when no maximum is supplied.
pub const DEFAULT_SPAN_YEARS: i32 = 3;

/// Inclusive `[minimum, maximum]` range of selectable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateBound {
    pub minimum: NaiveDate,
    pub maximum: NaiveDate,
}

impl DateBound {
    /// Build a bound from optional limits, applying the documented defaults.
    ///
    /// A missing minimum becomes `today`, a missing maximum becomes
    /// `minimum + 3 years`. A maximum earlier than the minimum is repaired
    /// the same way as a missing one.
    pub fn resolve(minimum: Option<NaiveDate>, maximum: Option<NaiveDate>, today: NaiveDate) -> Self {
        let minimum = minimum.unwrap_or(today);
        let default_maximum = || date::add_years(minimum, DEFAULT_SPAN_YEARS).unwrap_or(minimum);

        let maximum = match maximum {
            Some(max) if max < minimum => {
                log::warn!(
                    "Maximum date {} is before minimum date {}; using {} years from minimum",
                    max,
                    minimum,
                    DEFAULT_SPAN_YEARS
                );
                default_maximum()
            }
            Some(max) => max,
            None => default_maximum(),
        };

        Self { minimum, maximum }
    }

    /// Bound starting today and ending three years later.
    pub fn from_today() -> Self {
        Self::resolve(None, None, date::today())
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        !date::is_before(day, self.minimum) && !date::is_after(day, self.maximum)
    }
}

impl Default for DateBound {
    fn default() -> Self {
        Self::from_today()
    }
}
