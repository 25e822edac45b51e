//! Link building for the share dialog.

use crate::core::dashboard::Dashboard;
use crate::core::query::{RouteQuery, keys};

/// Absolute link to `dashboard`, keeping the current query.
///
/// Panel/edit keys are dropped so the link always opens the whole dashboard.
#[must_use]
pub fn share_url(origin: &str, dashboard: &Dashboard, query: &RouteQuery) -> String {
    let origin = origin.trim_end_matches('/');
    let slug = dashboard.slug();
    let mut url = if slug.is_empty() {
        format!("{origin}/d/{}", dashboard.uid)
    } else {
        format!("{origin}/d/{}/{slug}", dashboard.uid)
    };
    let kept: RouteQuery = query
        .iter()
        .filter(|(key, _)| {
            ![keys::EDITVIEW, keys::EDIT, keys::TAB]
                .iter()
                .any(|dropped| dropped == key)
        })
        .fold(RouteQuery::new(), |acc, (key, value)| acc.with(key, value));
    if !kept.is_empty() {
        url.push('?');
        url.push_str(&kept.encode());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::demo_dashboard;

    #[test]
    fn link_includes_slug_and_kept_query() {
        let dashboard = demo_dashboard("abc123");
        let query = RouteQuery::new()
            .with("orgId", "1")
            .with(keys::EDITVIEW, "settings")
            .with(keys::REFRESH, "30s");
        assert_eq!(
            share_url("https://vista.example/", &dashboard, &query),
            "https://vista.example/d/abc123/service-overview?orgId=1&refresh=30s"
        );
    }

    #[test]
    fn untitled_dashboard_has_no_slug_segment() {
        let mut dashboard = demo_dashboard("xyz");
        dashboard.title = "!!".into();
        assert_eq!(
            share_url("http://localhost:3000", &dashboard, &RouteQuery::new()),
            "http://localhost:3000/d/xyz"
        );
    }
}
