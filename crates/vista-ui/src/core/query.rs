//! Route query map and partial patches.
//!
//! # Design
//! - The query is owned by the router; UI surfaces only send patches.
//! - A patch entry of `None` removes the key; keys not in the patch are kept.
//! - Encoding follows `application/x-www-form-urlencoded`; bare keys
//!   (`?fullscreen`) decode to an empty value and encode back unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Query keys the navigation bar reads or writes.
pub mod keys {
    /// Auto-refresh interval.
    pub const REFRESH: &str = "refresh";
    /// Named edit view (e.g. `settings`).
    pub const EDITVIEW: &str = "editview";
    /// Panel shown fullscreen or in edit mode.
    pub const PANEL_ID: &str = "panelId";
    /// Panel edit mode flag.
    pub const EDIT: &str = "edit";
    /// Fullscreen panel flag.
    pub const FULLSCREEN: &str = "fullscreen";
    /// Active tab inside the panel editor.
    pub const TAB: &str = "tab";
}

/// Errors raised while decoding a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    /// A component was not valid percent-encoded UTF-8.
    #[error("query component '{segment}' is not valid percent-encoded UTF-8")]
    InvalidEncoding {
        /// Offending raw component.
        segment: String,
    },
}

/// Snapshot of the current route query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteQuery(BTreeMap<String, String>);

impl RouteQuery {
    /// Empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is present (with any value).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the query has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Named edit view, ignoring blank values.
    #[must_use]
    pub fn editview(&self) -> Option<&str> {
        self.get(keys::EDITVIEW).filter(|view| !view.trim().is_empty())
    }

    /// Whether a panel is shown fullscreen (`?fullscreen` or `?fullscreen=true`).
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.get(keys::FULLSCREEN)
            .is_some_and(|value| value != "false" && value != "0")
    }

    /// Apply a partial patch, returning the merged query.
    #[must_use]
    pub fn apply(&self, patch: &QueryPatch) -> Self {
        let mut merged = self.0.clone();
        for (key, value) in &patch.0 {
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Self(merged)
    }

    /// Decode a query string, with or without the leading `?`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryParseError::InvalidEncoding`] when a component does not
    /// decode to UTF-8.
    pub fn parse(raw: &str) -> Result<Self, QueryParseError> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut map = BTreeMap::new();
        for segment in raw.split('&').filter(|segment| !segment.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key)?;
            if key.is_empty() {
                continue;
            }
            map.insert(key, decode_component(value)?);
        }
        Ok(Self(map))
    }

    /// Encode as a query string without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    urlencoding::encode(key).into_owned()
                } else {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Iterate over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn decode_component(raw: &str) -> Result<String, QueryParseError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| QueryParseError::InvalidEncoding {
            segment: raw.to_string(),
        })
}

/// Partial update to the route query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPatch(BTreeMap<String, Option<String>>);

impl QueryPatch {
    /// Empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, or remove it when `value` is `None`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Set `key` to `value`.
    #[must_use]
    pub fn set(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Some(value.into()))
    }

    /// Remove `key`.
    #[must_use]
    pub fn remove(self, key: impl Into<String>) -> Self {
        self.with(key, None)
    }

    /// Entry for `key`: `Some(None)` means "remove".
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Option::as_deref)
    }

    /// Keys touched by the patch.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the patch touches no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_instead_of_replacing() {
        let query = RouteQuery::new()
            .with("orgId", "1")
            .with(keys::REFRESH, "5m")
            .with(keys::PANEL_ID, "4");
        let patch = QueryPatch::new()
            .set(keys::REFRESH, "1m")
            .remove(keys::PANEL_ID)
            .remove(keys::TAB);
        let merged = query.apply(&patch);
        assert_eq!(merged.get("orgId"), Some("1"));
        assert_eq!(merged.get(keys::REFRESH), Some("1m"));
        assert!(!merged.contains(keys::PANEL_ID));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn removal_patch_leaves_key_absent_not_blank() {
        let query = RouteQuery::new().with(keys::REFRESH, "30s");
        let merged = query.apply(&QueryPatch::new().with(keys::REFRESH, None));
        assert!(!merged.contains(keys::REFRESH));
        assert!(merged.is_empty());
    }

    #[test]
    fn parse_handles_bare_keys_plus_and_percent_encoding() {
        let query = RouteQuery::parse("?fullscreen&panelId=2&title=CPU+load%20%25").expect("parse");
        assert_eq!(query.get(keys::FULLSCREEN), Some(""));
        assert!(query.is_fullscreen());
        assert_eq!(query.get(keys::PANEL_ID), Some("2"));
        assert_eq!(query.get("title"), Some("CPU load %"));
    }

    #[test]
    fn parse_rejects_invalid_utf8() {
        let err = RouteQuery::parse("a=%FF").expect_err("invalid utf8");
        assert_eq!(
            err,
            QueryParseError::InvalidEncoding {
                segment: "%FF".into()
            }
        );
    }

    #[test]
    fn encode_is_sorted_and_reparses() {
        let query = RouteQuery::new()
            .with(keys::FULLSCREEN, "")
            .with(keys::EDITVIEW, "settings")
            .with("var-host", "a b&c");
        let encoded = query.encode();
        assert_eq!(encoded, "editview=settings&fullscreen&var-host=a%20b%26c");
        assert_eq!(RouteQuery::parse(&encoded), Ok(query));
    }

    #[test]
    fn editview_and_fullscreen_helpers() {
        assert_eq!(RouteQuery::new().with(keys::EDITVIEW, " ").editview(), None);
        assert_eq!(
            RouteQuery::new().with(keys::EDITVIEW, "settings").editview(),
            Some("settings")
        );
        assert!(!RouteQuery::new().with(keys::FULLSCREEN, "false").is_fullscreen());
        assert!(!RouteQuery::new().is_fullscreen());
    }

    #[test]
    fn patch_get_distinguishes_removal() {
        let patch = QueryPatch::new().set(keys::EDITVIEW, "settings").remove(keys::TAB);
        assert_eq!(patch.get(keys::EDITVIEW), Some(Some("settings")));
        assert_eq!(patch.get(keys::TAB), Some(None));
        assert_eq!(patch.get(keys::EDIT), None);
        assert_eq!(patch.keys().collect::<Vec<_>>(), vec!["editview", "tab"]);
    }
}
