//! Refresh-interval selection shown by the refresh picker.
//!
//! # Design
//! - A selection is either the `Off` sentinel or a (label, period) pair.
//! - The label is the stored string itself, so selection -> string -> selection
//!   is lossless; `Off` maps to an unset field.
//! - Parsing stored values is lenient: anything unrecognized reads as `Off`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use vista_config::{IntervalError, parse_interval};

/// Label shown for the "no auto-refresh" option.
pub const OFF_LABEL: &str = "Off";

/// Refresh-interval selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RefreshSelection {
    /// Auto-refresh disabled.
    #[default]
    Off,
    /// Refresh every `period`, displayed as `label`.
    Every {
        /// Display label, identical to the stored refresh string.
        label: String,
        /// Parsed period.
        period: Duration,
    },
}

impl RefreshSelection {
    /// Derive the selection from a dashboard's stored refresh field.
    ///
    /// Unset, blank, zero, or malformed values read as [`RefreshSelection::Off`].
    #[must_use]
    pub fn from_refresh_field(value: Option<&str>) -> Self {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|err: IntervalError| {
                if !matches!(err, IntervalError::Empty) {
                    tracing::debug!(refresh = raw, error = %err, "unrecognized refresh interval");
                }
                Self::Off
            }),
            None => Self::Off,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Off => OFF_LABEL,
            Self::Every { label, .. } => label,
        }
    }

    /// Refresh period, or `None` when off.
    #[must_use]
    pub const fn period(&self) -> Option<Duration> {
        match self {
            Self::Off => None,
            Self::Every { period, .. } => Some(*period),
        }
    }

    /// Whether auto-refresh is disabled.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Value to store back on the dashboard (`None` for `Off`).
    #[must_use]
    pub fn to_refresh_field(&self) -> Option<String> {
        match self {
            Self::Off => None,
            Self::Every { label, .. } => Some(label.clone()),
        }
    }

    /// Options for the picker: `Off`, then `intervals` in order.
    ///
    /// A `current` selection missing from the list is inserted by period so
    /// the picker can always display what the dashboard has stored. When the
    /// list already holds the same period under another label (`1m` for a
    /// stored `60s`), that entry takes the stored label instead.
    #[must_use]
    pub fn options(intervals: &[String], current: &Self) -> Vec<Self> {
        let mut options: Vec<Self> = std::iter::once(Self::Off)
            .chain(intervals.iter().filter_map(|raw| raw.parse().ok()))
            .collect();
        let Self::Every { period, .. } = current else {
            return options;
        };
        if options.iter().any(|option| option.label() == current.label()) {
            return options;
        }
        if let Some(same) = options
            .iter_mut()
            .find(|option| option.period() == Some(*period))
        {
            *same = current.clone();
            return options;
        }
        let index = options
            .iter()
            .position(|option| option.period().is_some_and(|other| other > *period))
            .unwrap_or(options.len());
        options.insert(index, current.clone());
        options
    }

    /// Find an option by label.
    #[must_use]
    pub fn find<'a>(options: &'a [Self], label: &str) -> Option<&'a Self> {
        options.iter().find(|option| option.label() == label)
    }
}

impl FromStr for RefreshSelection {
    type Err = IntervalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let label = value.trim();
        if label == OFF_LABEL {
            return Ok(Self::Off);
        }
        let period = parse_interval(label)?;
        Ok(Self::Every {
            label: label.to_string(),
            period,
        })
    }
}

impl Display for RefreshSelection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
