use crate::models::settings::PickerSettings;

use super::service::SettingsError;

pub fn toml_to_settings(text: &str) -> Result<PickerSettings, SettingsError> {
    let settings: PickerSettings = toml::from_str(text)?;
    settings.style.validate().map_err(SettingsError::InvalidStyle)?;
    Ok(settings)
}

pub fn settings_to_toml(settings: &PickerSettings) -> Result<String, SettingsError> {
    Ok(toml::to_string_pretty(settings)?)
}
