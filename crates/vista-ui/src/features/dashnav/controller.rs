//! Navigation bar command handling.
//!
//! # Design
//! - Every command goes through a typed collaborator from [`NavServices`].
//! - Route changes are partial patches; the query map is never replaced.
//! - Star toggles are serialized: a click while a request is pending is
//!   ignored, and the result is published keyed by dashboard id so a late
//!   completion cannot touch a dashboard that is no longer shown.

use crate::core::dashboard::{Dashboard, DashboardId};
use crate::core::query::{QueryPatch, keys};
use crate::core::refresh::RefreshSelection;
use crate::core::services::{NavServices, ServiceError};
use crate::features::dashnav::actions::NavAction;
use crate::features::dashnav::layout::in_back_mode;
use std::cell::Cell;
use std::rc::Rc;
use vista_events::{AppEvent, ModalRequest};

/// Key value that leaves back mode.
pub const ESCAPE_KEY: &str = "Escape";

/// Tab selected when the share dialog opens.
pub const SHARE_DEFAULT_TAB: usize = 0;

/// Result of a star toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StarOutcome {
    /// Backend confirmed the new starred state.
    Applied(bool),
    /// Another toggle is still pending; this click was ignored.
    Busy,
    /// Backend call failed; the flag is unchanged.
    Failed(ServiceError),
}

/// Asynchronous work produced by [`DashNavController::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTask {
    /// Persist this dashboard.
    Save(Dashboard),
    /// Flip the starred flag of this dashboard.
    ToggleStar(Dashboard),
}

/// Result of an awaited [`NavTask`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Save finished with the given result.
    Saved(Result<u64, ServiceError>),
    /// Star toggle finished.
    Starred(StarOutcome),
}

/// Result of a synchronous dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Command fully handled.
    Done,
    /// The local refresh selection must become this value.
    RefreshChanged(RefreshSelection),
    /// Selection matched the current one; nothing happened.
    RefreshUnchanged,
    /// The parent view must add a panel.
    AddPanelRequested,
    /// Spawn this task on the UI executor.
    Pending(NavTask),
}

/// Snapshot of the bar's inputs at the time of a click.
#[derive(Clone, Copy, Debug)]
pub struct NavContext<'a> {
    /// Dashboard being shown.
    pub dashboard: &'a Dashboard,
    /// Active named edit view, if any.
    pub editview: Option<&'a str>,
    /// Current local refresh selection.
    pub selection: &'a RefreshSelection,
}

/// Issues navigation bar commands to the injected collaborators.
#[derive(Clone)]
pub struct DashNavController {
    services: NavServices,
    settings_view: String,
    star_in_flight: Rc<Cell<bool>>,
}

struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl DashNavController {
    /// Build a controller; `settings_view` is the editview name used by
    /// "open settings".
    #[must_use]
    pub fn new(services: NavServices, settings_view: impl Into<String>) -> Self {
        Self {
            services,
            settings_view: settings_view.into(),
            star_in_flight: Rc::new(Cell::new(false)),
        }
    }

    /// Handle a click. Asynchronous work is returned as [`NavOutcome::Pending`].
    #[must_use]
    pub fn dispatch(&self, action: NavAction, ctx: &NavContext<'_>) -> NavOutcome {
        tracing::debug!(action = action.name(), dashboard = %ctx.dashboard.uid, "nav action");
        match action {
            NavAction::RefreshNow => {
                self.refresh_now();
                NavOutcome::Done
            }
            NavAction::ChangeRefresh(next) => {
                match self.change_refresh_interval(ctx.dashboard.id, ctx.selection, next) {
                    Some(selection) => NavOutcome::RefreshChanged(selection),
                    None => NavOutcome::RefreshUnchanged,
                }
            }
            NavAction::OpenSearch => {
                self.open_search();
                NavOutcome::Done
            }
            NavAction::Close => {
                self.close(ctx.editview);
                NavOutcome::Done
            }
            NavAction::ToggleKiosk => {
                self.toggle_kiosk();
                NavOutcome::Done
            }
            NavAction::Save => NavOutcome::Pending(NavTask::Save(ctx.dashboard.clone())),
            NavAction::OpenSettings => {
                self.open_settings();
                NavOutcome::Done
            }
            NavAction::ToggleStar => {
                NavOutcome::Pending(NavTask::ToggleStar(ctx.dashboard.clone()))
            }
            NavAction::PlaylistPrev => {
                self.playlist_prev();
                NavOutcome::Done
            }
            NavAction::PlaylistNext => {
                self.playlist_next();
                NavOutcome::Done
            }
            NavAction::PlaylistStop => {
                self.playlist_stop();
                NavOutcome::Done
            }
            NavAction::OpenShare => {
                self.open_share(ctx.dashboard);
                NavOutcome::Done
            }
            NavAction::AddPanel => NavOutcome::AddPanelRequested,
        }
    }

    /// Await a task returned by [`Self::dispatch`].
    pub async fn run(&self, task: NavTask) -> TaskOutcome {
        match task {
            NavTask::Save(dashboard) => TaskOutcome::Saved(self.save(&dashboard).await),
            NavTask::ToggleStar(dashboard) => {
                TaskOutcome::Starred(self.toggle_star(&dashboard).await)
            }
        }
    }

    /// Ask the time service to re-query every panel.
    pub fn refresh_now(&self) {
        self.services.time.refresh_dashboard();
    }

    /// Switch the refresh interval.
    ///
    /// Returns the new selection, or `None` when `next` has the same label as
    /// `current` (no store write, no route patch).
    pub fn change_refresh_interval(
        &self,
        dashboard_id: DashboardId,
        current: &RefreshSelection,
        next: RefreshSelection,
    ) -> Option<RefreshSelection> {
        if next.label() == current.label() {
            return None;
        }
        let stored = next.to_refresh_field();
        self.services
            .dashboards
            .set_refresh(dashboard_id, stored.clone());
        self.services
            .location
            .update_query(QueryPatch::new().with(keys::REFRESH, stored));
        Some(next)
    }

    /// Open the dashboard search overlay.
    pub fn open_search(&self) {
        self.services.events.emit(AppEvent::ShowDashSearch);
    }

    /// Leave the current edit view, or the fullscreen/edit panel state.
    pub fn close(&self, editview: Option<&str>) {
        let patch = if editview.is_some_and(|view| !view.is_empty()) {
            QueryPatch::new().remove(keys::EDITVIEW)
        } else {
            QueryPatch::new()
                .remove(keys::PANEL_ID)
                .remove(keys::EDIT)
                .remove(keys::FULLSCREEN)
                .remove(keys::TAB)
        };
        self.services.location.update_query(patch);
    }

    /// Keyboard shortcut: Escape performs close/back while the bar shows
    /// the back control. Returns whether the key was handled.
    pub fn handle_key(&self, key: &str, editview: Option<&str>, is_fullscreen: bool) -> bool {
        if key != ESCAPE_KEY || !in_back_mode(editview, is_fullscreen) {
            return false;
        }
        tracing::debug!(editview, is_fullscreen, "escape pressed in back mode");
        self.close(editview);
        true
    }

    /// Cycle kiosk mode.
    pub fn toggle_kiosk(&self) {
        self.services.events.emit(AppEvent::ToggleKioskMode);
    }

    /// Open the settings edit view.
    pub fn open_settings(&self) {
        self.services
            .location
            .update_query(QueryPatch::new().set(keys::EDITVIEW, self.settings_view.clone()));
    }

    /// Persist the dashboard. Failures are surfaced by the persistence
    /// service; they are only logged here.
    ///
    /// # Errors
    ///
    /// Returns the persistence service's error unchanged.
    pub async fn save(&self, dashboard: &Dashboard) -> Result<u64, ServiceError> {
        let result = self.services.persistence.save(dashboard).await;
        match &result {
            Ok(version) => tracing::debug!(uid = %dashboard.uid, version, "dashboard saved"),
            Err(err) => tracing::warn!(uid = %dashboard.uid, error = %err, "dashboard save failed"),
        }
        result
    }

    /// Star or unstar the dashboard.
    pub async fn toggle_star(&self, dashboard: &Dashboard) -> StarOutcome {
        if self.star_in_flight.get() {
            tracing::warn!(uid = %dashboard.uid, "star toggle already pending; click ignored");
            return StarOutcome::Busy;
        }
        self.star_in_flight.set(true);
        let _guard = InFlight(Rc::clone(&self.star_in_flight));

        match self
            .services
            .persistence
            .toggle_star(dashboard.id, dashboard.meta.is_starred)
            .await
        {
            Ok(starred) => {
                self.services.dashboards.set_starred(dashboard.id, starred);
                StarOutcome::Applied(starred)
            }
            Err(err) => {
                tracing::warn!(uid = %dashboard.uid, error = %err, "star toggle failed");
                StarOutcome::Failed(err)
            }
        }
    }

    /// Whether a star toggle is pending.
    #[must_use]
    pub fn star_pending(&self) -> bool {
        self.star_in_flight.get()
    }

    /// Previous playlist dashboard.
    pub fn playlist_prev(&self) {
        self.services.playlist.prev();
    }

    /// Next playlist dashboard.
    pub fn playlist_next(&self) {
        self.services.playlist.next();
    }

    /// Stop the playlist; the playlist store publishes the stopped state.
    pub fn playlist_stop(&self) {
        self.services.playlist.stop();
    }

    /// Whether the playlist is running.
    #[must_use]
    pub fn playlist_playing(&self) -> bool {
        self.services.playlist.is_playing()
    }

    /// Open the share dialog on its default tab.
    pub fn open_share(&self, dashboard: &Dashboard) {
        self.services.events.emit(AppEvent::ShowModal {
            modal: ModalRequest::ShareDashboard {
                dashboard_uid: dashboard.uid.clone(),
                tab_index: SHARE_DEFAULT_TAB,
            },
        });
    }
}

impl PartialEq for DashNavController {
    fn eq(&self, other: &Self) -> bool {
        self.services == other.services
            && self.settings_view == other.settings_view
            && Rc::ptr_eq(&self.star_in_flight, &other.star_in_flight)
    }
}
