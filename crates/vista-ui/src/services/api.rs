//! HTTP client helpers (REST) and the dashboard persistence service.

use crate::core::dashboard::{Dashboard, DashboardId};
use crate::core::services::{DashboardPersistence, ServiceError};
use crate::core::store::{AppStore, push_toast};
use crate::core::ui::ToastKind;
use crate::models::{ApiMessage, DashboardResponse, SaveDashboardRequest, SaveDashboardResponse};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use std::rc::Rc;
use vista_events::{AppEvent, EventBus};
use yewdux::dispatch::Dispatch;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn checked(response: Response) -> anyhow::Result<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) => response.status_text(),
        };
        Err(ServiceError::Http { status, message }.into())
    }

    pub(crate) async fn fetch_dashboard(&self, uid: &str) -> anyhow::Result<Dashboard> {
        let response = Request::get(&self.url(&format!("/api/dashboards/uid/{uid}")))
            .send()
            .await?;
        let body: DashboardResponse = Self::checked(response).await?.json().await?;
        Ok(body.into_dashboard())
    }

    pub(crate) async fn save_dashboard(
        &self,
        dashboard: &Dashboard,
    ) -> anyhow::Result<SaveDashboardResponse> {
        let response = Request::post(&self.url("/api/dashboards/db"))
            .json(&SaveDashboardRequest::new(dashboard))?
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub(crate) async fn set_star(&self, dashboard_id: DashboardId, star: bool) -> anyhow::Result<()> {
        let url = self.url(&format!("/api/user/stars/dashboard/{dashboard_id}"));
        let request = if star {
            Request::post(&url)
        } else {
            Request::delete(&url)
        };
        Self::checked(request.send().await?).await?;
        Ok(())
    }
}

fn to_service_error(err: anyhow::Error) -> ServiceError {
    match err.downcast::<ServiceError>() {
        Ok(service) => service,
        Err(other) => match other.downcast_ref::<gloo_net::Error>() {
            Some(gloo_net::Error::SerdeError(decode)) => ServiceError::Decode(decode.to_string()),
            _ => ServiceError::Network(other.to_string()),
        },
    }
}

/// Persistence backed by the HTTP API. Failures raise an error toast.
pub(crate) struct ApiDashboardService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
    events: EventBus,
}

impl ApiDashboardService {
    pub(crate) fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, events: EventBus) -> Self {
        Self {
            client,
            dispatch,
            events,
        }
    }

    fn report(&self, action: &str, err: &ServiceError) {
        tracing::warn!(action, error = %err, "dashboard request failed");
        let message = format!("{action} failed: {err}");
        self.dispatch.reduce_mut(|store| {
            push_toast(store, message, ToastKind::Error);
        });
    }
}

#[async_trait(?Send)]
impl DashboardPersistence for ApiDashboardService {
    async fn save(&self, dashboard: &Dashboard) -> Result<u64, ServiceError> {
        match self.client.save_dashboard(dashboard).await {
            Ok(saved) => {
                self.events.publish(AppEvent::DashboardSaved {
                    uid: saved.uid,
                    version: saved.version,
                });
                Ok(saved.version)
            }
            Err(err) => {
                let err = to_service_error(err);
                self.report("Save dashboard", &err);
                Err(err)
            }
        }
    }

    async fn toggle_star(
        &self,
        dashboard_id: DashboardId,
        is_starred: bool,
    ) -> Result<bool, ServiceError> {
        let star = !is_starred;
        match self.client.set_star(dashboard_id, star).await {
            Ok(()) => Ok(star),
            Err(err) => {
                let err = to_service_error(err);
                self.report(if star { "Star dashboard" } else { "Unstar dashboard" }, &err);
                Err(err)
            }
        }
    }
}
