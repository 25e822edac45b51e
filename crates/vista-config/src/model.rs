//! Typed configuration model for the dashboard front-end.

use crate::defaults::{
    DEFAULT_LOG_LEVEL, DEFAULT_MIN_REFRESH_INTERVAL, DEFAULT_REFRESH_INTERVALS,
    DEFAULT_SETTINGS_VIEW,
};
use crate::interval::parse_interval;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Navigation and shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Base URL for API calls; empty means same origin.
    pub api_base_url: String,
    /// Refresh intervals offered by the picker, in display order.
    pub refresh_intervals: Vec<String>,
    /// Intervals shorter than this are not offered.
    pub min_refresh_interval: String,
    /// Edit-view name used by the settings button.
    pub settings_view: String,
    /// Front-end log level.
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            refresh_intervals: DEFAULT_REFRESH_INTERVALS
                .iter()
                .map(ToString::to_string)
                .collect(),
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL.to_string(),
            settings_view: DEFAULT_SETTINGS_VIEW.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl NavConfig {
    /// Minimum refresh period, or `None` when the configured value is invalid.
    #[must_use]
    pub fn min_refresh(&self) -> Option<Duration> {
        parse_interval(&self.min_refresh_interval).ok()
    }

    /// Intervals the picker should offer.
    ///
    /// A non-empty `overrides` list (a dashboard's own picker settings) wins
    /// over the configured list. Unparseable entries and entries shorter than
    /// the minimum are skipped; duplicates keep their first position.
    #[must_use]
    pub fn effective_intervals(&self, overrides: Option<&[String]>) -> Vec<String> {
        let source = match overrides {
            Some(list) if !list.is_empty() => list,
            _ => self.refresh_intervals.as_slice(),
        };
        let min = self.min_refresh().unwrap_or(Duration::ZERO);
        let mut seen = Vec::<Duration>::new();
        let mut out = Vec::new();
        for raw in source {
            let label = raw.trim();
            let Ok(period) = parse_interval(label) else {
                tracing::debug!(interval = label, "skipping unparseable refresh interval");
                continue;
            };
            if period < min || seen.contains(&period) {
                continue;
            }
            seen.push(period);
            out.push(label.to_string());
        }
        out
    }
}
