//! Loading configuration documents from JSON.

use crate::error::{ConfigError, ConfigResult};
use crate::model::NavConfig;
use crate::validate::validate;
use serde_json::Value;

/// Parse and validate a JSON configuration document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON and
/// [`ConfigError::InvalidField`] when validation fails.
pub fn load_from_str(document: &str) -> ConfigResult<NavConfig> {
    let config: NavConfig =
        serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
    validate(&config)?;
    Ok(config)
}

/// Parse and validate an already-decoded JSON value.
///
/// # Errors
///
/// Same as [`load_from_str`].
pub fn load_from_value(value: Value) -> ConfigResult<NavConfig> {
    let config: NavConfig =
        serde_json::from_value(value).map_err(|source| ConfigError::Parse { source })?;
    validate(&config)?;
    Ok(config)
}

/// Load a document, falling back to defaults when it is missing or invalid.
///
/// Failures are logged rather than returned so a broken embed never blocks
/// the UI from starting.
#[must_use]
pub fn load_or_default(document: Option<&str>) -> NavConfig {
    let Some(document) = document.filter(|doc| !doc.trim().is_empty()) else {
        tracing::debug!("no configuration document supplied; using defaults");
        return NavConfig::default();
    };
    match load_from_str(document) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid configuration document; using defaults");
            NavConfig::default()
        }
    }
}
