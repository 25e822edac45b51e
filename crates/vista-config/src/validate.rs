//! Validation helpers for configuration documents.

use crate::defaults::LOG_LEVELS;
use crate::error::{ConfigError, ConfigResult};
use crate::interval::parse_interval;
use crate::model::NavConfig;

/// Validate a configuration document.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first field that fails.
pub fn validate(config: &NavConfig) -> ConfigResult<()> {
    for raw in &config.refresh_intervals {
        parse_interval(raw).map_err(|err| ConfigError::InvalidField {
            field: "refresh_intervals",
            value: Some(raw.clone()),
            reason: err.to_string(),
        })?;
    }
    parse_interval(&config.min_refresh_interval).map_err(|err| ConfigError::InvalidField {
        field: "min_refresh_interval",
        value: Some(config.min_refresh_interval.clone()),
        reason: err.to_string(),
    })?;
    if config.effective_intervals(None).is_empty() {
        return Err(ConfigError::InvalidField {
            field: "refresh_intervals",
            value: None,
            reason: "no interval is at or above min_refresh_interval".to_string(),
        });
    }
    if config.settings_view.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "settings_view",
            value: Some(config.settings_view.clone()),
            reason: "must not be empty".to_string(),
        });
    }
    let level = config.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::InvalidField {
            field: "log_level",
            value: Some(config.log_level.clone()),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
