// Settings service
// Loading and saving picker configuration as TOML

mod mapper;
mod service;

pub use service::{SettingsError, SettingsService};
