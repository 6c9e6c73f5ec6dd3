//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::BackendGateway;
use board_core::{NotificationDispatcher, UpdatePoller, UpdateRepository};
use board_infra::gateway::{HostedGateway, InMemoryGateway};
use board_infra::notify::{SilentAudioCue, TracingNotificationChannel};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<UpdateRepository>,
    pub poller: Arc<UpdatePoller>,
    pub dispatcher: Arc<NotificationDispatcher>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let gateway: Arc<dyn BackendGateway> = match &config.gateway {
            Some(gateway_config) => {
                tracing::info!(base_url = %gateway_config.base_url, "Using hosted backend gateway");
                Arc::new(HostedGateway::new(gateway_config.clone()))
            }
            None => {
                tracing::warn!(
                    "GATEWAY_URL not set. Running against the in-memory gateway; data is not persisted."
                );
                Arc::new(InMemoryGateway::new())
            }
        };

        let repo = Arc::new(UpdateRepository::new(
            gateway,
            config.media_bucket.clone(),
            config.updates_table.clone(),
        ));

        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::new(TracingNotificationChannel),
            Arc::new(SilentAudioCue),
        ));

        let poller = Arc::new(UpdatePoller::new(repo.clone(), dispatcher.clone()));

        tracing::info!("Application state initialized");

        Self {
            repo,
            poller,
            dispatcher,
        }
    }
}
