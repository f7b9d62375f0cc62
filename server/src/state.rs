//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the parsed configuration and one pooled
//! `reqwest::Client` behind the auth gateway.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::gateway::AuthGateway;

/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub gateway: AuthGateway,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let gateway = AuthGateway::new(reqwest::Client::new(), &config.backend_url);
        Self { config: Arc::new(config), gateway }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
