//! Default values for the navigation configuration.
//!
//! # Design
//! - Keep defaults in one place so the model, loader and tests agree.

/// Refresh intervals offered when neither configuration nor the dashboard
/// supplies a list.
pub const DEFAULT_REFRESH_INTERVALS: [&str; 10] = [
    "5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d",
];

/// Shortest refresh interval the picker will offer.
pub const DEFAULT_MIN_REFRESH_INTERVAL: &str = "5s";

/// Edit-view name used when opening dashboard settings.
pub const DEFAULT_SETTINGS_VIEW: &str = "settings";

/// Default log level for the front-end.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by configuration.
pub const LOG_LEVELS: [&str; 6] = ["error", "warn", "info", "debug", "trace", "off"];
