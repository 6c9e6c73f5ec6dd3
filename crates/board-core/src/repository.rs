//! Update repository - translates domain actions into gateway calls.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Update, UpdateDraft};
use crate::error::GatewayError;
use crate::ports::BackendGateway;

/// Object keys live under a single prefix inside the bucket.
const OBJECT_PREFIX: &str = "updates";

/// Thin domain-facing wrapper around the backend gateway.
pub struct UpdateRepository {
    gateway: Arc<dyn BackendGateway>,
    bucket: String,
    table: String,
}

impl UpdateRepository {
    pub fn new(gateway: Arc<dyn BackendGateway>, bucket: String, table: String) -> Self {
        Self {
            gateway,
            bucket,
            table,
        }
    }

    /// Upload a media file and return its public URL.
    pub async fn upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, GatewayError> {
        let path = object_path(file_name);
        self.gateway.upload(&self.bucket, &path, bytes).await
    }

    /// Persist a new update and return the stored entity.
    pub async fn save_update(&self, draft: UpdateDraft) -> Result<Update, GatewayError> {
        let record = json!({
            "media_url": draft.media_url,
            "media_type": draft.media_type,
            "caption": draft.caption,
            "created_at": Utc::now(),
        });

        let stored = self.gateway.insert_row(&self.table, record).await?;
        serde_json::from_value(stored).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// Fetch the full update list, newest-first.
    ///
    /// Rows that fail to decode are skipped with a warning rather than
    /// failing the whole listing.
    pub async fn list_updates(&self) -> Result<Vec<Update>, GatewayError> {
        let rows = self.gateway.list_rows(&self.table, "created_at").await?;

        let updates = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Update>(row) {
                Ok(update) => Some(update),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed update row");
                    None
                }
            })
            .collect();

        Ok(updates)
    }

    /// Delete an update: remove its storage object (if any), then the row.
    ///
    /// A failed object removal is logged but does not abort the row
    /// delete; the row is the source of truth for the feed.
    pub async fn delete_update(
        &self,
        id: Uuid,
        media_url: Option<&str>,
    ) -> Result<(), GatewayError> {
        if let Some(url) = media_url
            && let Some(name) = url.rsplit('/').next()
        {
            let path = format!("{OBJECT_PREFIX}/{name}");
            if let Err(e) = self.gateway.remove_object(&self.bucket, &path).await {
                tracing::warn!(%id, error = %e, "Failed to remove storage object");
            }
        }

        self.gateway.delete_row(&self.table, id).await
    }
}

/// Generate a collision-safe object key: `updates/{millis}_{rand}.{ext}`.
fn object_path(file_name: &str) -> String {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "bin",
    };
    let rand = Uuid::new_v4().simple().to_string();
    format!(
        "{OBJECT_PREFIX}/{}_{}.{}",
        Utc::now().timestamp_millis(),
        &rand[..6],
        ext
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::Value;
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::MediaType;

    /// Records every gateway call; listing replays a canned response.
    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<String>>,
        rows: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl BackendGateway for RecordingGateway {
        async fn upload(
            &self,
            bucket: &str,
            path: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, GatewayError> {
            self.calls.lock().await.push(format!("upload {bucket}"));
            Ok(format!("memory://{bucket}/{path}"))
        }

        async fn insert_row(&self, _table: &str, mut record: Value) -> Result<Value, GatewayError> {
            self.calls.lock().await.push("insert".into());
            record["id"] = Value::String(Uuid::new_v4().to_string());
            Ok(record)
        }

        async fn list_rows(
            &self,
            _table: &str,
            _order_desc: &str,
        ) -> Result<Vec<Value>, GatewayError> {
            Ok(self.rows.lock().await.clone())
        }

        async fn delete_row(&self, _table: &str, id: Uuid) -> Result<(), GatewayError> {
            self.calls.lock().await.push(format!("delete_row {id}"));
            Ok(())
        }

        async fn remove_object(&self, _bucket: &str, path: &str) -> Result<(), GatewayError> {
            self.calls.lock().await.push(format!("remove_object {path}"));
            Ok(())
        }
    }

    fn repo(gateway: Arc<RecordingGateway>) -> UpdateRepository {
        UpdateRepository::new(gateway, "board-media".into(), "updates".into())
    }

    #[test]
    fn object_path_keeps_extension_under_prefix() {
        let path = object_path("selfie.JPG");
        assert!(path.starts_with("updates/"), "got {path}");
        assert!(path.ends_with(".JPG"), "got {path}");

        let fallback = object_path("noext");
        assert!(fallback.ends_with(".bin"), "got {fallback}");
    }

    #[tokio::test]
    async fn save_round_trips_the_draft() {
        let gateway = Arc::new(RecordingGateway::default());
        let saved = repo(gateway)
            .save_update(UpdateDraft {
                media_url: Some("memory://board-media/updates/a.jpg".into()),
                media_type: MediaType::Image,
                caption: "miss you".into(),
            })
            .await
            .unwrap();

        assert_eq!(saved.caption, "miss you");
        assert_eq!(saved.media_type, MediaType::Image);
    }

    #[tokio::test]
    async fn list_skips_malformed_rows() {
        let gateway = Arc::new(RecordingGateway::default());
        *gateway.rows.lock().await = vec![
            serde_json::json!({
                "id": Uuid::new_v4(),
                "media_url": null,
                "media_type": "image",
                "caption": "ok",
                "created_at": Utc::now(),
            }),
            serde_json::json!({ "garbage": true }),
        ];

        let updates = repo(gateway).list_updates().await.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].caption, "ok");
    }

    #[tokio::test]
    async fn delete_removes_object_before_row() {
        let gateway = Arc::new(RecordingGateway::default());
        let id = Uuid::new_v4();
        repo(gateway.clone())
            .delete_update(id, Some("https://cdn.example/updates/123_abc.jpg"))
            .await
            .unwrap();

        let calls = gateway.calls.lock().await;
        assert_eq!(calls[0], "remove_object updates/123_abc.jpg");
        assert_eq!(calls[1], format!("delete_row {id}"));
    }

    #[tokio::test]
    async fn delete_without_media_skips_storage() {
        let gateway = Arc::new(RecordingGateway::default());
        repo(gateway.clone())
            .delete_update(Uuid::new_v4(), None)
            .await
            .unwrap();

        let calls = gateway.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("delete_row"));
    }
}
