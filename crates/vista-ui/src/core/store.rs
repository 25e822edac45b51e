//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Components never mutate props; they request changes and these reducers
//!   produce the next state.
//! - Requests keyed by dashboard id are dropped when that dashboard is no
//!   longer current.

use crate::core::dashboard::{Dashboard, DashboardId};
use crate::core::playlist::PlaylistState;
use crate::core::query::{QueryPatch, RouteQuery, keys};
use crate::core::refresh::RefreshSelection;
use crate::core::search::{self, RecentDashboard};
use crate::core::ui::{KioskMode, Toast, ToastKind};
use vista_events::{AppEvent, ModalRequest, is_overlay_event};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Dashboard currently shown.
    pub dashboard: Option<Dashboard>,
    /// Current route query.
    pub query: RouteQuery,
    /// Playlist session.
    pub playlist: PlaylistState,
    /// Chrome state (kiosk, overlays, toasts).
    pub chrome: ChromeState,
    /// Incremented every time panels should re-query.
    pub refresh_generation: u64,
    /// Recently viewed dashboards.
    pub recent: Vec<RecentDashboard>,
}

/// Overlay and notification state owned by the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    /// Kiosk display mode.
    pub kiosk: KioskMode,
    /// Open modal, if any.
    pub modal: Option<ModalRequest>,
    /// Whether the search overlay is open.
    pub search_open: bool,
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

/// Apply an event from the bus.
pub fn apply_event(store: &mut AppStore, event: &AppEvent) {
    if is_overlay_event(event) {
        // One overlay at a time.
        store.chrome.search_open = false;
        store.chrome.modal = None;
    }
    match event {
        AppEvent::ShowDashSearch => store.chrome.search_open = true,
        AppEvent::ToggleKioskMode => store.chrome.kiosk = store.chrome.kiosk.next(),
        AppEvent::ShowModal { modal } => store.chrome.modal = Some(modal.clone()),
        AppEvent::HideModal => store.chrome.modal = None,
        AppEvent::DashboardSaved { uid, version } => {
            if let Some(dashboard) = store.dashboard.as_mut().filter(|d| &d.uid == uid) {
                dashboard.version = *version;
            }
            push_toast(store, "Dashboard saved", ToastKind::Success);
        }
    }
}

/// Replace the current dashboard and remember it for search.
pub fn set_dashboard(store: &mut AppStore, dashboard: Dashboard) {
    search::remember(&mut store.recent, &dashboard);
    store.dashboard = Some(dashboard);
    apply_refresh_from_query(store);
}

fn current_mut(store: &mut AppStore, dashboard_id: DashboardId) -> Option<&mut Dashboard> {
    let dashboard = store.dashboard.as_mut()?;
    if dashboard.id == dashboard_id {
        Some(dashboard)
    } else {
        tracing::debug!(
            requested = dashboard_id,
            current = dashboard.id,
            "dropping update for a dashboard that is no longer shown"
        );
        None
    }
}

/// Store a new refresh interval. Returns `false` when `dashboard_id` is stale.
pub fn set_dashboard_refresh(
    store: &mut AppStore,
    dashboard_id: DashboardId,
    refresh: Option<String>,
) -> bool {
    current_mut(store, dashboard_id).is_some_and(|dashboard| {
        dashboard.refresh = refresh;
        true
    })
}

/// Store the starred flag. Returns `false` when `dashboard_id` is stale.
pub fn set_dashboard_starred(
    store: &mut AppStore,
    dashboard_id: DashboardId,
    starred: bool,
) -> bool {
    current_mut(store, dashboard_id).is_some_and(|dashboard| {
        dashboard.meta.is_starred = starred;
        true
    })
}

/// Merge a query patch into the store.
pub fn apply_query_patch(store: &mut AppStore, patch: &QueryPatch) {
    store.query = store.query.apply(patch);
}

/// Replace the query after a browser navigation and re-sync the refresh field.
pub fn replace_query(store: &mut AppStore, query: RouteQuery) {
    store.query = query;
    apply_refresh_from_query(store);
}

/// A valid `refresh` query value overrides the dashboard's stored interval.
pub fn apply_refresh_from_query(store: &mut AppStore) {
    let Some(raw) = store.query.get(keys::REFRESH) else {
        return;
    };
    let selection = RefreshSelection::from_refresh_field(Some(raw));
    if let Some(dashboard) = store.dashboard.as_mut() {
        dashboard.refresh = selection.to_refresh_field();
    }
}

/// Ask panels to re-query.
pub fn request_refresh(store: &mut AppStore) {
    store.refresh_generation = store.refresh_generation.wrapping_add(1);
}

/// Queue a toast and return its id.
pub fn push_toast(store: &mut AppStore, message: impl Into<String>, kind: ToastKind) -> u64 {
    let chrome = &mut store.chrome;
    chrome.next_toast_id += 1;
    let id = chrome.next_toast_id;
    chrome.toasts.push(Toast {
        id,
        message: message.into(),
        kind,
    });
    id
}

/// Remove a toast by id.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.chrome.toasts.retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::demo_dashboard;

    fn store_with_dashboard() -> AppStore {
        let mut store = AppStore::default();
        set_dashboard(&mut store, demo_dashboard("abc"));
        store
    }

    #[test]
    fn stale_dashboard_updates_are_ignored() {
        let mut store = store_with_dashboard();
        assert!(!set_dashboard_starred(&mut store, 99, true));
        assert!(!set_dashboard_refresh(&mut store, 99, None));
        let dashboard = store.dashboard.as_ref().expect("dashboard");
        assert!(!dashboard.meta.is_starred);
        assert_eq!(dashboard.refresh.as_deref(), Some("30s"));

        assert!(set_dashboard_starred(&mut store, 1, true));
        assert!(store.dashboard.as_ref().expect("dashboard").meta.is_starred);
    }

    #[test]
    fn no_dashboard_drops_updates() {
        let mut store = AppStore::default();
        assert!(!set_dashboard_refresh(&mut store, 1, Some("5m".into())));
    }

    #[test]
    fn events_drive_chrome_state() {
        let mut store = store_with_dashboard();
        apply_event(&mut store, &AppEvent::ShowDashSearch);
        apply_event(&mut store, &AppEvent::ToggleKioskMode);
        apply_event(
            &mut store,
            &AppEvent::ShowModal {
                modal: ModalRequest::ShareDashboard {
                    dashboard_uid: "abc".into(),
                    tab_index: 0,
                },
            },
        );
        assert!(!store.chrome.search_open, "share dialog replaces the search overlay");
        assert_eq!(store.chrome.kiosk, KioskMode::Tv);
        assert!(store.chrome.modal.is_some());

        apply_event(&mut store, &AppEvent::HideModal);
        assert!(store.chrome.modal.is_none());
        assert!(!store.chrome.search_open);
    }

    #[test]
    fn search_replaces_open_modal_and_kiosk_keeps_overlays() {
        let mut store = store_with_dashboard();
        apply_event(
            &mut store,
            &AppEvent::ShowModal {
                modal: ModalRequest::ShareDashboard {
                    dashboard_uid: "abc".into(),
                    tab_index: 0,
                },
            },
        );
        apply_event(&mut store, &AppEvent::ShowDashSearch);
        assert!(store.chrome.search_open);
        assert!(store.chrome.modal.is_none());

        apply_event(&mut store, &AppEvent::ToggleKioskMode);
        assert!(store.chrome.search_open);
    }

    #[test]
    fn saved_event_bumps_version_and_toasts() {
        let mut store = store_with_dashboard();
        apply_event(
            &mut store,
            &AppEvent::DashboardSaved {
                uid: "abc".into(),
                version: 7,
            },
        );
        assert_eq!(store.dashboard.as_ref().map(|d| d.version), Some(7));
        assert_eq!(store.chrome.toasts.len(), 1);
        assert_eq!(store.chrome.toasts[0].kind, ToastKind::Success);

        let id = store.chrome.toasts[0].id;
        dismiss_toast(&mut store, id);
        assert!(store.chrome.toasts.is_empty());
    }

    #[test]
    fn refresh_query_overrides_stored_interval() {
        let mut store = store_with_dashboard();
        replace_query(&mut store, RouteQuery::new().with(keys::REFRESH, "1m"));
        assert_eq!(
            store.dashboard.as_ref().and_then(|d| d.refresh.as_deref()),
            Some("1m")
        );

        replace_query(&mut store, RouteQuery::new());
        assert_eq!(
            store.dashboard.as_ref().and_then(|d| d.refresh.as_deref()),
            Some("1m")
        );
    }

    #[test]
    fn query_patch_merges_into_store() {
        let mut store = AppStore::default();
        replace_query(&mut store, RouteQuery::new().with("orgId", "1"));
        apply_query_patch(&mut store, &QueryPatch::new().set(keys::EDITVIEW, "settings"));
        assert_eq!(store.query.get("orgId"), Some("1"));
        assert_eq!(store.query.editview(), Some("settings"));
        request_refresh(&mut store);
        assert_eq!(store.refresh_generation, 1);
    }
}
