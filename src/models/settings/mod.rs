// Settings module
// Host-supplied picker configuration with documented defaults

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bound::DateBound;
use crate::models::grid::ITEMS_PER_ROW;

/// Longest inclusive span (in days) a range may cover unless configured.
pub const DEFAULT_MAX_SELECTABLE_RANGE: u32 = 30;

/// Picker configuration. Applying it to a picker resets the selection to
/// `selected_start_date`/`selected_end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_date: Option<NaiveDate>,
    pub disabled_dates: Vec<NaiveDate>,
    pub max_selectable_range: u32,
    /// Pre-seeded start, applied without tap validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_start_date: Option<NaiveDate>,
    /// Pre-seeded end, applied without tap validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_end_date: Option<NaiveDate>,
    pub style: PickerStyle,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            minimum_date: None,
            maximum_date: None,
            disabled_dates: Vec::new(),
            max_selectable_range: DEFAULT_MAX_SELECTABLE_RANGE,
            selected_start_date: None,
            selected_end_date: None,
            style: PickerStyle::default(),
        }
    }
}

impl PickerSettings {
    pub fn with_bounds(mut self, minimum: NaiveDate, maximum: NaiveDate) -> Self {
        self.minimum_date = Some(minimum);
        self.maximum_date = Some(maximum);
        self
    }

    pub fn with_disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    pub fn with_max_selectable_range(mut self, days: u32) -> Self {
        self.max_selectable_range = days;
        self
    }

    pub fn with_selection(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.selected_start_date = start;
        self.selected_end_date = end;
        self
    }

    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolve the configured limits against `today`.
    pub fn bound(&self, today: NaiveDate) -> DateBound {
        DateBound::resolve(self.minimum_date, self.maximum_date, today)
    }

    pub fn disabled_set(&self) -> HashSet<NaiveDate> {
        self.disabled_dates.iter().copied().collect()
    }

    /// Maximum span in days, at least 1.
    pub fn effective_max_selectable_range(&self) -> u32 {
        if self.max_selectable_range == 0 {
            log::warn!("max_selectable_range of 0 is not usable; using 1");
            1
        } else {
            self.max_selectable_range
        }
    }
}

/// Presentation defaults handed to the host's cell renderer.
///
/// Colours are `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    pub title_text: String,
    pub left_button_title: String,
    pub right_button_title: String,
    pub selected_color: String,
    pub selected_label_color: String,
    pub highlighted_color: String,
    pub highlighted_label_color: String,
    pub saturday_color: String,
    pub sunday_color: String,
    pub cell_font_size: f32,
    pub header_font_size: f32,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            title_text: "Select Dates".to_string(),
            left_button_title: "Cancel".to_string(),
            right_button_title: "Done".to_string(),
            selected_color: "#4296F0".to_string(),
            selected_label_color: "#FFFFFF".to_string(),
            highlighted_color: "#E6E6E6".to_string(),
            highlighted_label_color: "#FFFFFF".to_string(),
            saturday_color: "#0000FF".to_string(),
            sunday_color: "#FF0000".to_string(),
            cell_font_size: 15.0,
            header_font_size: 17.0,
        }
    }
}

impl PickerStyle {
    /// Label tint for a grid column, if the column is a weekend day.
    pub fn weekday_label_color(&self, column: usize) -> Option<&str> {
        match column % ITEMS_PER_ROW {
            0 => Some(self.sunday_color.as_str()),
            6 => Some(self.saturday_color.as_str()),
            _ => None,
        }
    }

    /// Validate colour fields are hex colours (#RRGGBB or #RGB).
    pub fn validate(&self) -> Result<(), String> {
        let colors = [
            ("selected_color", &self.selected_color),
            ("selected_label_color", &self.selected_label_color),
            ("highlighted_color", &self.highlighted_color),
            ("highlighted_label_color", &self.highlighted_label_color),
            ("saturday_color", &self.saturday_color),
            ("sunday_color", &self.sunday_color),
        ];
        for (name, color) in colors {
            let hex_ok = color.starts_with('#')
                && (color.len() == 7 || color.len() == 4)
                && color[1..].chars().all(|c| c.is_ascii_hexdigit());
            if !hex_ok {
                return Err(format!("{} must be in hex format (#RRGGBB or #RGB)", name));
            }
        }
        if self.cell_font_size <= 0.0 || self.header_font_size <= 0.0 {
            return Err("Font sizes must be positive".to_string());
        }
        Ok(())
    }
}
