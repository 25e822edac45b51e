//! Recently viewed dashboards listed by the search overlay.

use crate::core::dashboard::Dashboard;

/// Maximum number of remembered dashboards.
pub const RECENT_LIMIT: usize = 10;

/// Dashboard shown in the search overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentDashboard {
    /// Dashboard uid.
    pub uid: String,
    /// Display title.
    pub title: String,
    /// Folder title, when the dashboard is inside a folder.
    pub folder: Option<String>,
}

impl From<&Dashboard> for RecentDashboard {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            uid: dashboard.uid.clone(),
            title: dashboard.title.clone(),
            folder: dashboard.folder_title().map(str::to_string),
        }
    }
}

/// Move `dashboard` to the front of `recent`, capped at [`RECENT_LIMIT`].
pub fn remember(recent: &mut Vec<RecentDashboard>, dashboard: &Dashboard) {
    recent.retain(|entry| entry.uid != dashboard.uid);
    recent.insert(0, RecentDashboard::from(dashboard));
    recent.truncate(RECENT_LIMIT);
}

/// Entries whose title or folder contains `term` (case-insensitive).
#[must_use]
pub fn filter<'a>(recent: &'a [RecentDashboard], term: &str) -> Vec<&'a RecentDashboard> {
    let needle = term.trim().to_lowercase();
    recent
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry
                    .folder
                    .as_deref()
                    .is_some_and(|folder| folder.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::demo_dashboard;

    fn titled(uid: &str, title: &str) -> Dashboard {
        let mut dashboard = demo_dashboard(uid);
        dashboard.title = title.into();
        dashboard
    }

    #[test]
    fn remember_dedupes_and_caps() {
        let mut recent = Vec::new();
        for index in 0..12 {
            remember(&mut recent, &titled(&format!("d{index}"), "Board"));
        }
        remember(&mut recent, &titled("d5", "Board"));
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent[0].uid, "d5");
        assert_eq!(recent.iter().filter(|entry| entry.uid == "d5").count(), 1);
    }

    #[test]
    fn filter_matches_title_and_folder() {
        let mut recent = Vec::new();
        remember(&mut recent, &titled("a", "Latency"));
        remember(&mut recent, &titled("b", "Errors"));
        assert_eq!(filter(&recent, "lat").len(), 1);
        assert_eq!(filter(&recent, "PRODUCTION").len(), 2);
        assert_eq!(filter(&recent, "  ").len(), 2);
        assert!(filter(&recent, "billing").is_empty());
    }
}
