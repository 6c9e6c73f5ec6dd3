//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// How many updates the poller currently has cached.
    pub updates_cached: usize,
    /// True until the poller's first refresh attempt completes.
    pub feed_loading: bool,
}

/// Server status plus a view of the feed poller, so a monitor can
/// tell "up but never refreshed" from "up and polling".
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        updates_cached: state.poller.snapshot().await.len(),
        feed_loading: state.poller.is_loading(),
    };

    HttpResponse::Ok().json(response)
}
