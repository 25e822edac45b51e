//! Event payload types carried across the UI.

use chrono::{DateTime, Utc};

/// Identifier assigned to each event emitted on the bus.
pub type EventId = u64;

/// Default buffer size for the in-memory replay ring.
pub const DEFAULT_REPLAY_CAPACITY: usize = 256;

/// Typed application events raised by UI surfaces.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Open the dashboard search overlay.
    ShowDashSearch,
    /// Cycle the kiosk (chrome-hiding) display mode.
    ToggleKioskMode,
    /// Open a modal dialog.
    ShowModal {
        /// Modal to present.
        modal: ModalRequest,
    },
    /// Close whichever modal is currently open.
    HideModal,
    /// A dashboard was persisted successfully.
    DashboardSaved {
        /// Stable dashboard uid.
        uid: String,
        /// Version reported by the backend after saving.
        version: u64,
    },
}

impl AppEvent {
    /// Machine-friendly discriminator for logging and filtering.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ShowDashSearch => "show_dash_search",
            Self::ToggleKioskMode => "toggle_kiosk_mode",
            Self::ShowModal { .. } => "show_modal",
            Self::HideModal => "hide_modal",
            Self::DashboardSaved { .. } => "dashboard_saved",
        }
    }
}

/// Modal dialogs that can be requested through [`AppEvent::ShowModal`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum ModalRequest {
    /// Share dialog for a dashboard.
    ShareDashboard {
        /// Uid of the dashboard being shared.
        dashboard_uid: String,
        /// Tab selected when the dialog opens.
        tab_index: usize,
    },
}

/// Metadata wrapper around events.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct EventEnvelope {
    /// Sequential identifier.
    pub id: EventId,
    /// Emission timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event payload.
    pub event: AppEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(AppEvent::ShowDashSearch.kind(), "show_dash_search");
        assert_eq!(AppEvent::ToggleKioskMode.kind(), "toggle_kiosk_mode");
        assert_eq!(
            AppEvent::ShowModal {
                modal: ModalRequest::ShareDashboard {
                    dashboard_uid: "abc".into(),
                    tab_index: 0,
                },
            }
            .kind(),
            "show_modal"
        );
        assert_eq!(AppEvent::HideModal.kind(), "hide_modal");
    }

    #[test]
    fn modal_request_serialises_with_tags() {
        let event = AppEvent::ShowModal {
            modal: ModalRequest::ShareDashboard {
                dashboard_uid: "abc".into(),
                tab_index: 0,
            },
        };
        let json = serde_json::to_value(&event).expect("serialise");
        assert_eq!(json["type"], "show_modal");
        assert_eq!(json["modal"]["modal"], "share_dashboard");
        assert_eq!(json["modal"]["dashboard_uid"], "abc");
        let back: AppEvent = serde_json::from_value(json).expect("deserialise");
        assert_eq!(back, event);
    }
}
