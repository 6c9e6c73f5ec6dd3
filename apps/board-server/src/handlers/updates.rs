//! Update feed handlers: list, multipart upload, delete.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use futures_util::StreamExt;
use serde::Deserialize;
use uuid::Uuid;

use board_core::domain::{MediaType, Update, UpdateDraft};
use board_shared::dto::{FeedResponse, UpdateDto};
use board_shared::{ApiResponse, time::relative_age};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

fn to_dto(update: &Update) -> UpdateDto {
    UpdateDto {
        id: update.id.to_string(),
        caption: update.caption.clone(),
        media_url: update.media_url.clone(),
        media_type: update.media_type.as_str().to_string(),
        created_at: update.created_at.to_rfc3339(),
        age: relative_age(update.created_at, Utc::now()),
    }
}

/// GET /api/updates - the poller's cached feed, newest-first.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let updates = state.poller.snapshot().await;

    let response = FeedResponse {
        updates: updates.iter().map(to_dto).collect(),
        loading: state.poller.is_loading(),
    };

    HttpResponse::Ok().json(ApiResponse::ok(response))
}

struct UploadedFile {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

/// POST /api/updates - multipart form with a `caption` text field and
/// a `file` media field, both required.
pub async fn create(state: web::Data<AppState>, mut payload: Multipart) -> AppResult<HttpResponse> {
    let mut caption: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::BadRequest(e.to_string()))?;

        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_owned),
                cd.get_filename().map(str::to_owned),
            ),
            None => (None, None),
        };
        let mime = field.content_type().map(|m| m.essence_str().to_owned());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(e.to_string()))?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::PayloadTooLarge(format!(
                    "upload exceeds {} bytes",
                    MAX_UPLOAD_BYTES
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        match name.as_deref() {
            Some("caption") => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| AppError::BadRequest("caption must be UTF-8".to_string()))?;
                caption = Some(text);
            }
            Some("file") => {
                file = Some(UploadedFile {
                    name: filename.unwrap_or_else(|| "upload.bin".to_string()),
                    mime: mime.unwrap_or_default(),
                    bytes,
                });
            }
            // Unknown parts are drained and ignored.
            _ => {}
        }
    }

    let caption = caption
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("caption is required".to_string()))?;
    let file = file.ok_or_else(|| AppError::BadRequest("file is required".to_string()))?;

    let media_type = MediaType::from_mime(&file.mime).ok_or_else(|| {
        AppError::BadRequest(format!("unsupported media type: {}", file.mime))
    })?;

    let media_url = state.repo.upload_media(&file.name, file.bytes).await?;

    let update = state
        .repo
        .save_update(UpdateDraft {
            media_url: Some(media_url),
            media_type,
            caption,
        })
        .await?;

    tracing::info!(update_id = %update.id, media_type = media_type.as_str(), "Update posted");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_dto(&update),
        "Update posted",
    )))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub media_url: Option<String>,
}

/// DELETE /api/updates/{id}
pub async fn delete(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<DeleteQuery>,
) -> AppResult<HttpResponse> {
    state
        .repo
        .delete_update(*id, query.media_url.as_deref())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
