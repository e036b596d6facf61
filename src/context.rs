//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::Api;
use crate::config::ClientConfig;
use crate::router;
use crate::routes::{Location, Route};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Api>,
    config: StoredValue<ClientConfig>,
    /// Current path and query
    pub location: RwSignal<Location>,
}

impl AppContext {
    pub fn new(config: ClientConfig, location: Location) -> Self {
        Self {
            api: StoredValue::new(Api::from_config(&config)),
            config: StoredValue::new(config),
            location: RwSignal::new(location),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Current route (tracked)
    pub fn route(&self) -> Route {
        self.location.with(|location| location.route())
    }

    pub fn navigate(&self, href: &str) {
        router::navigate(self.location, href, false);
    }

    pub fn go_to(&self, route: &Route) {
        self.navigate(&route.path());
    }

    /// Redirect without leaving a history entry
    pub fn redirect(&self, route: &Route) {
        router::navigate(self.location, &route.path(), true);
    }

    /// Open an overlay on the current path
    pub fn open_overlay(&self, param: &str, value: &str) {
        let href = self.location.with_untracked(|location| location.with_param(param, value));
        self.navigate(&href);
    }

    /// Drop every overlay parameter, staying on the current path
    pub fn close_overlay(&self) {
        let href = self.location.with_untracked(|location| location.without_query());
        router::navigate(self.location, &href, true);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
