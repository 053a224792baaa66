// src/application/state.rs

use std::sync::Arc;

use crate::application::config::ClientConfig;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{HttpScoringClient, ScoringTransport};
use crate::services::SubmissionCoordinator;

/// Shared application wiring.
/// The session itself (`InputStateManager`) is owned by the front end loop.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub event_bus: Arc<EventBus>,
    pub coordinator: Arc<SubmissionCoordinator>,
}

impl AppState {
    /// Wire the HTTP client described by `config`
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let client = HttpScoringClient::new(&config.base_url, config.request_timeout())?;
        log::info!("Scoring endpoint: {}", client.endpoint());
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Wire an arbitrary transport (tests, alternative clients)
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn ScoringTransport>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let coordinator = Arc::new(SubmissionCoordinator::new(transport, event_bus.clone()));
        Self {
            config,
            event_bus,
            coordinator,
        }
    }
}
