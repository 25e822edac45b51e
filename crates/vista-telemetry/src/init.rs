//! Telemetry initialisation primitives and logging configuration.
//!
//! # Design
//! - Centralises logging setup with a single entry point.
//! - Native builds install a fmt layer (pretty or JSON) behind an `EnvFilter`.
//! - wasm32 builds install the browser console layer behind a level filter.
//! - Records the build SHA once to avoid inconsistencies across modules.

use crate::error::{Result, TelemetryError};
use once_cell::sync::OnceCell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{EnvFilter, fmt};

/// Default logging target when no level is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static BUILD_SHA: OnceCell<String> = OnceCell::new();

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] for an unknown level string and
/// [`TelemetryError::SubscriberInstall`] when a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let level = parse_level(config.level)?;
    let _ = BUILD_SHA.set(config.build_sha.to_string());
    install(config, level)
}

/// Access the build SHA recorded during logging initialisation.
#[must_use]
pub fn build_sha() -> &'static str {
    BUILD_SHA.get().map_or("dev", String::as_str)
}

/// Parse a level string (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] when the string is not a level.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| TelemetryError::InvalidLevel {
            level: level.to_string(),
        })
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level string (e.g., `info`, `debug`).
    pub level: &'a str,
    /// Output format selection for native builds.
    pub format: LogFormat,
    /// Build identifier recorded once per process.
    pub build_sha: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
            build_sha: build_sha(),
        }
    }
}

/// Available output formats for the native logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable, pretty-printed logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: &LoggingConfig<'_>, level: LevelFilter) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(false))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init(),
    };
    result.map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(target_arch = "wasm32")]
fn install(_config: &LoggingConfig<'_>, level: LevelFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(level)
        .with(crate::console::ConsoleLayer)
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_levels() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off").ok(), Some(LevelFilter::OFF));
    }

    #[test]
    fn parse_level_rejects_garbage() {
        let err = parse_level("chatty").expect_err("invalid level");
        assert!(matches!(err, TelemetryError::InvalidLevel { level } if level == "chatty"));
    }

    #[test]
    fn second_install_is_rejected() {
        let config = LoggingConfig {
            level: "info",
            format: LogFormat::Pretty,
            build_sha: "abc123",
        };
        let _ = init_logging(&config);
        let second = init_logging(&config);
        assert!(matches!(
            second,
            Err(TelemetryError::SubscriberInstall { .. })
        ));
    }

    #[test]
    fn invalid_level_fails_before_install() {
        let config = LoggingConfig {
            level: "nope",
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(TelemetryError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn default_format_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        };
        assert_eq!(LogFormat::infer(), expected);
    }
}
