//! Error types for configuration operations.

use thiserror::Error;

/// Errors raised while parsing an interval string such as `30s` or `1h`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The input was empty after trimming.
    #[error("interval is empty")]
    Empty,
    /// The input did not match `<digits><unit>`.
    #[error("interval '{value}' must be a whole number followed by ms, s, m, h, d or w")]
    Malformed {
        /// Offending input.
        value: String,
    },
    /// The interval was zero.
    #[error("interval '{value}' must be greater than zero")]
    Zero {
        /// Offending input.
        value: String,
    },
    /// The interval does not fit in a `Duration`.
    #[error("interval '{value}' is too large")]
    Overflow {
        /// Offending input.
        value: String,
    },
}

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for the model.
    #[error("failed to parse configuration document")]
    Parse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A field contained an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Human-readable reason for the failure.
        reason: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn interval_errors_render_inputs() {
        let err = IntervalError::Malformed {
            value: "soon".into(),
        };
        assert!(err.to_string().contains("'soon'"));
        assert_eq!(IntervalError::Empty.to_string(), "interval is empty");
    }

    #[test]
    fn parse_error_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let err = ConfigError::Parse { source };
        assert_eq!(err.to_string(), "failed to parse configuration document");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_field_includes_reason() {
        let err = ConfigError::InvalidField {
            field: "settings_view",
            value: None,
            reason: "must not be empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'settings_view': must not be empty"
        );
    }
}
