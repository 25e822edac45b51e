//! Dashboard model shared by the navigation bar and the app shell.
//!
//! # Design
//! - Mirror the backend JSON shape (camelCase) so documents load without DTO glue.
//! - Treat `refresh: false` and `refresh: ""` as "no auto-refresh".
//! - Permission flags default to `false` so missing metadata hides controls.

use serde::{Deserialize, Deserializer, Serialize};

/// Numeric dashboard identifier assigned by the backend.
pub type DashboardId = u64;

/// Dashboard as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Backend identifier (used for starring).
    #[serde(default)]
    pub id: DashboardId,
    /// Stable uid used in URLs.
    #[serde(default)]
    pub uid: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Version counter bumped on every save.
    #[serde(default)]
    pub version: u64,
    /// Stored auto-refresh interval (`"5m"`), or `None` when off.
    #[serde(default, deserialize_with = "deserialize_refresh")]
    pub refresh: Option<String>,
    /// Current time range.
    #[serde(default)]
    pub time: TimeRange,
    /// Time picker settings.
    #[serde(default)]
    pub timepicker: TimePickerSettings,
    /// Snapshot origin, present only for snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<SnapshotInfo>,
    /// Permission-derived metadata.
    #[serde(default)]
    pub meta: DashboardMeta,
}

impl Dashboard {
    /// Whether the dashboard lives inside a folder (the General folder is id 0).
    #[must_use]
    pub const fn has_folder(&self) -> bool {
        self.meta.folder_id > 0
    }

    /// Folder title when the dashboard lives inside a folder.
    #[must_use]
    pub fn folder_title(&self) -> Option<&str> {
        if self.has_folder() {
            self.meta.folder_title.as_deref()
        } else {
            None
        }
    }

    /// URL of the dashboard a snapshot was taken from, when non-empty.
    #[must_use]
    pub fn snapshot_url(&self) -> Option<&str> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.original_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// URL-friendly slug derived from the title.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut pending_dash = false;
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.extend(ch.to_lowercase());
            } else {
                pending_dash = true;
            }
        }
        slug
    }
}

/// Permission flags and folder association delivered alongside a dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMeta {
    /// User may save the dashboard (also gates "add panel").
    pub can_save: bool,
    /// User may star the dashboard.
    pub can_star: bool,
    /// User may share the dashboard.
    pub can_share: bool,
    /// Settings view is available.
    pub show_settings: bool,
    /// Dashboard is starred by the current user.
    pub is_starred: bool,
    /// Folder id; `0` is the General folder.
    pub folder_id: i64,
    /// Folder title when inside a folder.
    pub folder_title: Option<String>,
}

/// Relative or absolute time range (`now-6h` .. `now`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Range start expression.
    pub from: String,
    /// Range end expression.
    pub to: String,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            from: "now-6h".to_string(),
            to: "now".to_string(),
        }
    }
}

/// Per-dashboard time picker settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePickerSettings {
    /// Hide the time picker widget entirely.
    pub hidden: bool,
    /// Dashboard-specific refresh intervals; empty means "use configuration".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refresh_intervals: Vec<String>,
}

/// Snapshot metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotInfo {
    /// URL of the dashboard the snapshot was taken from.
    pub original_url: Option<String>,
}

fn deserialize_refresh<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRefresh {
        Text(String),
        Flag(#[allow(dead_code)] bool),
    }

    let raw = Option::<RawRefresh>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawRefresh::Text(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(RawRefresh::Text(_) | RawRefresh::Flag(_)) | None => None,
    })
}

/// Dashboard used when the backend is unreachable.
#[must_use]
pub fn demo_dashboard(uid: &str) -> Dashboard {
    Dashboard {
        id: 1,
        uid: uid.to_string(),
        title: "Service Overview".to_string(),
        version: 1,
        refresh: Some("30s".to_string()),
        time: TimeRange::default(),
        timepicker: TimePickerSettings::default(),
        snapshot: None,
        meta: DashboardMeta {
            can_save: true,
            can_star: true,
            can_share: true,
            show_settings: true,
            is_starred: false,
            folder_id: 3,
            folder_title: Some("Production".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refresh_accepts_strings_and_false() {
        let text: Dashboard = serde_json::from_value(json!({ "refresh": "5m" })).expect("text");
        assert_eq!(text.refresh.as_deref(), Some("5m"));

        let off: Dashboard = serde_json::from_value(json!({ "refresh": false })).expect("flag");
        assert_eq!(off.refresh, None);

        let empty: Dashboard = serde_json::from_value(json!({ "refresh": "  " })).expect("empty");
        assert_eq!(empty.refresh, None);

        let missing: Dashboard = serde_json::from_value(json!({})).expect("missing");
        assert_eq!(missing.refresh, None);

        let null: Dashboard = serde_json::from_value(json!({ "refresh": null })).expect("null");
        assert_eq!(null.refresh, None);
    }

    #[test]
    fn meta_uses_camel_case_and_defaults() {
        let dashboard: Dashboard = serde_json::from_value(json!({
            "title": "Edge",
            "meta": { "canSave": true, "isStarred": true, "folderId": 4, "folderTitle": "Ops" },
            "snapshot": { "originalUrl": "https://dash/d/abc" }
        }))
        .expect("parse");
        assert!(dashboard.meta.can_save);
        assert!(!dashboard.meta.can_star);
        assert!(dashboard.meta.is_starred);
        assert_eq!(dashboard.folder_title(), Some("Ops"));
        assert_eq!(dashboard.snapshot_url(), Some("https://dash/d/abc"));
        assert_eq!(dashboard.time, TimeRange::default());
    }

    #[test]
    fn general_folder_has_no_prefix() {
        let mut dashboard = demo_dashboard("abc");
        dashboard.meta.folder_id = 0;
        assert!(!dashboard.has_folder());
        assert_eq!(dashboard.folder_title(), None);
    }

    #[test]
    fn blank_snapshot_url_is_ignored() {
        let mut dashboard = demo_dashboard("abc");
        dashboard.snapshot = Some(SnapshotInfo {
            original_url: Some(" ".into()),
        });
        assert_eq!(dashboard.snapshot_url(), None);
    }

    #[test]
    fn slug_collapses_punctuation() {
        let mut dashboard = demo_dashboard("abc");
        dashboard.title = "  API: Latency & Errors ".into();
        assert_eq!(dashboard.slug(), "api-latency-errors");
    }
}
