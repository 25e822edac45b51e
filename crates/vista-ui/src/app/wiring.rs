//! Store- and router-backed implementations of the navigation services.

use crate::app::routes::Route;
use crate::core::dashboard::DashboardId;
use crate::core::playlist::PlaylistItem;
use crate::core::query::QueryPatch;
use crate::core::services::{DashboardSink, LocationDispatch, PlaylistControl, TimeService};
use crate::core::store::{
    AppStore, apply_query_patch, request_refresh, set_dashboard_refresh, set_dashboard_starred,
};
use yew_router::prelude::Navigator;
use yewdux::dispatch::Dispatch;

/// Applies dashboard change requests to the store.
pub(crate) struct StoreDashboardSink {
    pub dispatch: Dispatch<AppStore>,
}

impl DashboardSink for StoreDashboardSink {
    fn set_refresh(&self, dashboard_id: DashboardId, refresh: Option<String>) {
        self.dispatch.reduce_mut(|store| {
            set_dashboard_refresh(store, dashboard_id, refresh);
        });
    }

    fn set_starred(&self, dashboard_id: DashboardId, starred: bool) {
        self.dispatch.reduce_mut(|store| {
            set_dashboard_starred(store, dashboard_id, starred);
        });
    }
}

/// Bumps the store's refresh generation; panels re-query when it changes.
pub(crate) struct StoreTimeService {
    pub dispatch: Dispatch<AppStore>,
}

impl TimeService for StoreTimeService {
    fn refresh_dashboard(&self) {
        self.dispatch.reduce_mut(request_refresh);
        tracing::debug!(generation = self.dispatch.get().refresh_generation, "dashboard refresh");
    }
}

/// Playlist transport over the store, navigating to the selected dashboard.
pub(crate) struct StorePlaylist {
    pub dispatch: Dispatch<AppStore>,
    pub navigator: Navigator,
}

impl StorePlaylist {
    fn go(&self, item: Option<PlaylistItem>) {
        if let Some(item) = item {
            tracing::debug!(uid = %item.uid, "playlist step");
            self.navigator.push(&Route::dashboard(item.uid));
        }
    }
}

impl PlaylistControl for StorePlaylist {
    fn is_playing(&self) -> bool {
        self.dispatch.get().playlist.playing
    }

    fn prev(&self) {
        let mut item = None;
        self.dispatch.reduce_mut(|store| item = store.playlist.prev().cloned());
        self.go(item);
    }

    fn next(&self) {
        let mut item = None;
        self.dispatch.reduce_mut(|store| item = store.playlist.next().cloned());
        self.go(item);
    }

    fn stop(&self) {
        self.dispatch.reduce_mut(|store| store.playlist.stop());
        tracing::debug!("playlist stopped");
    }
}

/// Merges query patches into the store and the browser URL.
pub(crate) struct RouterLocation {
    pub dispatch: Dispatch<AppStore>,
    pub navigator: Navigator,
}

impl LocationDispatch for RouterLocation {
    fn update_query(&self, patch: QueryPatch) {
        self.dispatch.reduce_mut(|store| apply_query_patch(store, &patch));
        let query = self.dispatch.get().query.clone();
        if let Err(err) = self.navigator.push_with_query(&Route::current(), &query) {
            tracing::warn!(error = %err, "failed to update location query");
        }
    }
}
