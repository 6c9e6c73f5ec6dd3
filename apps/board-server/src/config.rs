//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use board_infra::gateway::HostedGatewayConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Hosted backend credentials; absent means in-memory mode.
    pub gateway: Option<HostedGatewayConfig>,
    pub media_bucket: String,
    pub updates_table: String,
    pub poll_interval: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let gateway = match (env::var("GATEWAY_URL"), env::var("GATEWAY_API_KEY")) {
            (Ok(base_url), Ok(api_key)) => Some(HostedGatewayConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key,
            }),
            _ => None,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gateway,
            media_bucket: env::var("MEDIA_BUCKET").unwrap_or_else(|_| "board-media".to_string()),
            updates_table: env::var("UPDATES_TABLE").unwrap_or_else(|_| "updates".to_string()),
            poll_interval: Duration::from_secs(
                env::var("POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|&s| s > 0)
                    .unwrap_or(5),
            ),
        }
    }
}
