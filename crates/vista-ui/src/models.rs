//! Shared DTOs matching the dashboard API.

use crate::core::dashboard::{Dashboard, DashboardMeta};
use serde::{Deserialize, Serialize};

/// Response of `GET /api/dashboards/uid/{uid}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DashboardResponse {
    /// Dashboard document.
    pub dashboard: Dashboard,
    /// Permission metadata delivered next to the document.
    #[serde(default)]
    pub meta: DashboardMeta,
}

impl DashboardResponse {
    /// Merge the metadata into the dashboard.
    #[must_use]
    pub fn into_dashboard(self) -> Dashboard {
        let mut dashboard = self.dashboard;
        dashboard.meta = self.meta;
        dashboard
    }
}

/// Body of `POST /api/dashboards/db`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDashboardRequest<'a> {
    /// Dashboard document.
    pub dashboard: &'a Dashboard,
    /// Overwrite concurrent changes.
    pub overwrite: bool,
    /// Folder the dashboard is saved into.
    pub folder_id: i64,
}

impl<'a> SaveDashboardRequest<'a> {
    /// Save without overwriting newer versions, keeping the current folder.
    #[must_use]
    pub const fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            dashboard,
            overwrite: false,
            folder_id: dashboard.meta.folder_id,
        }
    }
}

/// Response of `POST /api/dashboards/db`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SaveDashboardResponse {
    /// Dashboard uid.
    pub uid: String,
    /// Version after the save.
    pub version: u64,
    /// Backend status string (`success`).
    #[serde(default)]
    pub status: String,
}

/// Error body returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message.
    pub message: String,
}
