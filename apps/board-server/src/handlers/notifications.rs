//! Notification permission handlers.

use actix_web::{HttpResponse, web};

use board_shared::ApiResponse;
use board_shared::dto::PermissionResponse;

use crate::state::AppState;

/// GET /api/notifications - the recorded permission state.
pub async fn permission_state(state: web::Data<AppState>) -> HttpResponse {
    let permission = state.dispatcher.permission_state().await;

    HttpResponse::Ok().json(ApiResponse::ok(PermissionResponse {
        permission: permission.as_str().to_string(),
    }))
}

/// POST /api/notifications/permission - run the permission prompt and
/// return what it recorded.
pub async fn request_permission(state: web::Data<AppState>) -> HttpResponse {
    let permission = state.dispatcher.request_permission().await;

    HttpResponse::Ok().json(ApiResponse::ok(PermissionResponse {
        permission: permission.as_str().to_string(),
    }))
}
