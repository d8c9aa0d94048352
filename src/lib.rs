// Date Range Picker Library
// Month-by-month calendar grid with start/end range selection

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::PickerEvent;
pub use models::grid::{CellClassification, CellData, GridAddress, RangeEdge};
pub use models::settings::{PickerSettings, PickerStyle};
pub use services::picker::{DateRangePicker, GridDataSource};
