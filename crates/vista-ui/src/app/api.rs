//! Shared app context: API client, event bus, configuration.
//!
//! # Design
//! - Create exactly one API client and one event bus per app boot.
//! - Compare by pointer so context consumers do not re-render spuriously.

use crate::services::api::ApiClient;
use std::rc::Rc;
use vista_config::NavConfig;
use vista_events::EventBus;

/// Singletons shared through a Yew context.
#[derive(Clone)]
pub(crate) struct AppCtx {
    /// API client.
    pub client: Rc<ApiClient>,
    /// UI event bus.
    pub bus: EventBus,
    /// Loaded configuration.
    pub config: Rc<NavConfig>,
}

impl AppCtx {
    pub(crate) fn new(config: NavConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config.api_base_url.clone())),
            bus: EventBus::new(),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for AppCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
            && self.bus == other.bus
            && Rc::ptr_eq(&self.config, &other.config)
    }
}
