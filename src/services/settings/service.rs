use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::PickerSettings;

use super::mapper::{settings_to_toml, toml_to_settings};

/// File name of the picker configuration inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "picker.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

pub struct SettingsService;

impl SettingsService {
    /// Default location of the settings file for the current user.
    pub fn default_config_path() -> Result<PathBuf, SettingsError> {
        let dirs = ProjectDirs::from("com", "KenBoyle", "DateRangePicker")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn from_toml_str(text: &str) -> Result<PickerSettings, SettingsError> {
        toml_to_settings(text)
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<PickerSettings, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml_to_settings(&text)?;
        log::info!("Loaded picker settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<PickerSettings, SettingsError> {
        if !path.exists() {
            log::info!("No settings file at {}; using defaults", path.display());
            return Ok(PickerSettings::default());
        }
        Self::load(path)
    }

    /// Write `settings` to `path`, creating parent directories.
    pub fn save(path: &Path, settings: &PickerSettings) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let text = settings_to_toml(settings)?;
        fs::write(path, text).map_err(io_error)?;
        log::info!("Saved picker settings to {}", path.display());
        Ok(())
    }
}
