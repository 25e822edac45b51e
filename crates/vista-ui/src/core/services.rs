//! Typed collaborator interfaces used by the navigation bar.
//!
//! # Design
//! - Each collaborator is an explicit trait; the bar receives them bundled in
//!   [`NavServices`] instead of looking services up by name at runtime.
//! - State changes go through sinks owned by the app store, never through
//!   in-place mutation of props.
//! - Everything is single-threaded (`Rc`, `?Send` futures) to match the
//!   browser event loop.

use crate::core::dashboard::{Dashboard, DashboardId};
use crate::core::query::QueryPatch;
use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;
use vista_events::{AppEvent, EventBus, event_kind};

/// Failures reported by remote collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
    /// The request never reached the backend.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Dashboard persistence (save and star/unstar).
#[async_trait(?Send)]
pub trait DashboardPersistence {
    /// Persist the dashboard, returning the new version.
    async fn save(&self, dashboard: &Dashboard) -> Result<u64, ServiceError>;

    /// Flip the starred state and return the state after the call.
    async fn toggle_star(
        &self,
        dashboard_id: DashboardId,
        is_starred: bool,
    ) -> Result<bool, ServiceError>;
}

/// Playlist transport.
pub trait PlaylistControl {
    /// Whether a playlist session is active.
    fn is_playing(&self) -> bool;
    /// Go to the previous dashboard.
    fn prev(&self);
    /// Go to the next dashboard.
    fn next(&self);
    /// End the session.
    fn stop(&self);
}

/// Time-range refresh service.
pub trait TimeService {
    /// Re-query every panel of the current dashboard.
    fn refresh_dashboard(&self);
}

/// Fire-and-forget UI events.
pub trait EventSink {
    /// Emit an event.
    fn emit(&self, event: AppEvent);
}

impl EventSink for EventBus {
    fn emit(&self, event: AppEvent) {
        let kind = event_kind(&event);
        match self.try_publish(event) {
            Ok(id) => tracing::debug!(event_id = id, kind, "ui event published"),
            Err(err) => tracing::debug!(
                event_id = err.event_id(),
                kind = err.event_kind(),
                "ui event has no live subscriber; kept for replay"
            ),
        }
    }
}

/// Route-query updates.
pub trait LocationDispatch {
    /// Merge `patch` into the current query.
    fn update_query(&self, patch: QueryPatch);
}

/// Requests for dashboard state changes, applied by the owning store.
///
/// Implementations ignore requests for a dashboard that is no longer current.
pub trait DashboardSink {
    /// Store a new refresh interval (`None` disables auto-refresh).
    fn set_refresh(&self, dashboard_id: DashboardId, refresh: Option<String>);
    /// Store the starred flag reported by the backend.
    fn set_starred(&self, dashboard_id: DashboardId, starred: bool);
}

/// Bundle of collaborators handed to the navigation bar.
#[derive(Clone)]
pub struct NavServices {
    /// Save and star/unstar.
    pub persistence: Rc<dyn DashboardPersistence>,
    /// Playlist transport.
    pub playlist: Rc<dyn PlaylistControl>,
    /// Dashboard refresh.
    pub time: Rc<dyn TimeService>,
    /// UI events.
    pub events: Rc<dyn EventSink>,
    /// Route-query updates.
    pub location: Rc<dyn LocationDispatch>,
    /// Dashboard state changes.
    pub dashboards: Rc<dyn DashboardSink>,
}

impl PartialEq for NavServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.persistence, &other.persistence)
            && Rc::ptr_eq(&self.playlist, &other.playlist)
            && Rc::ptr_eq(&self.time, &other.time)
            && Rc::ptr_eq(&self.events, &other.events)
            && Rc::ptr_eq(&self.location, &other.location)
            && Rc::ptr_eq(&self.dashboards, &other.dashboards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_bus_is_an_event_sink() {
        let bus = EventBus::new();
        let sink: Rc<dyn EventSink> = Rc::new(bus.clone());
        sink.emit(AppEvent::ToggleKioskMode);
        let backlog = bus.backlog_since(0);
        assert_eq!(backlog.len(), 1);
        assert_eq!(backlog[0].event, AppEvent::ToggleKioskMode);
    }

    #[tokio::test]
    async fn emitted_events_reach_live_and_late_subscribers() {
        let bus = EventBus::new();
        let sink: Rc<dyn EventSink> = Rc::new(bus.clone());
        let mut live = bus.subscribe(None);
        sink.emit(AppEvent::ShowDashSearch);
        let delivered = live.next().await.map(|envelope| envelope.event);
        assert_eq!(delivered, Some(AppEvent::ShowDashSearch));

        drop(live);
        sink.emit(AppEvent::HideModal);
        let mut late = bus.subscribe(Some(0));
        let replayed: Vec<_> = [late.next().await, late.next().await]
            .into_iter()
            .flatten()
            .map(|envelope| envelope.event)
            .collect();
        assert_eq!(replayed, vec![AppEvent::ShowDashSearch, AppEvent::HideModal]);
    }

    #[test]
    fn service_errors_render_details() {
        let err = ServiceError::Http {
            status: 412,
            message: "version-mismatch".into(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 412: version-mismatch"
        );
        assert_eq!(
            ServiceError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }
}
