//! Interval grammar shared by configuration and the refresh picker.
//!
//! An interval is a whole number followed by a unit: `ms`, `s`, `m`, `h`,
//! `d` or `w` (for example `500ms`, `30s`, `1h`, `1d`).

use crate::error::IntervalError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

static INTERVAL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(\d+)(ms|s|m|h|d|w)$").ok());

/// Parse an interval string into a [`Duration`].
///
/// # Errors
///
/// Returns an [`IntervalError`] when the input is empty, malformed, zero, or
/// too large to represent.
pub fn parse_interval(value: &str) -> Result<Duration, IntervalError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntervalError::Empty);
    }
    let malformed = || IntervalError::Malformed {
        value: trimmed.to_string(),
    };
    let captures = INTERVAL_RE
        .as_ref()
        .and_then(|re| re.captures(trimmed))
        .ok_or_else(malformed)?;
    let amount: u64 = captures[1].parse().map_err(|_| IntervalError::Overflow {
        value: trimmed.to_string(),
    })?;
    if amount == 0 {
        return Err(IntervalError::Zero {
            value: trimmed.to_string(),
        });
    }
    let unit_millis: u64 = match &captures[2] {
        "ms" => 1,
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        "w" => 604_800_000,
        _ => return Err(malformed()),
    };
    amount
        .checked_mul(unit_millis)
        .map(Duration::from_millis)
        .ok_or_else(|| IntervalError::Overflow {
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_unit() {
        assert_eq!(parse_interval("250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_interval("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_interval("5m"), Ok(Duration::from_secs(300)));
        assert_eq!(parse_interval("2h"), Ok(Duration::from_secs(7_200)));
        assert_eq!(parse_interval("1d"), Ok(Duration::from_secs(86_400)));
        assert_eq!(parse_interval("1w"), Ok(Duration::from_secs(604_800)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_interval(" 10s "), Ok(Duration::from_secs(10)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_interval(""), Err(IntervalError::Empty));
        assert!(matches!(
            parse_interval("10"),
            Err(IntervalError::Malformed { .. })
        ));
        assert!(matches!(
            parse_interval("1.5m"),
            Err(IntervalError::Malformed { .. })
        ));
        assert!(matches!(
            parse_interval("5M"),
            Err(IntervalError::Malformed { .. })
        ));
        assert!(matches!(parse_interval("0s"), Err(IntervalError::Zero { .. })));
    }

    #[test]
    fn rejects_overflowing_values() {
        assert!(matches!(
            parse_interval("99999999999999999999w"),
            Err(IntervalError::Overflow { .. })
        ));
        assert!(matches!(
            parse_interval("18446744073709551615w"),
            Err(IntervalError::Overflow { .. })
        ));
    }
}
