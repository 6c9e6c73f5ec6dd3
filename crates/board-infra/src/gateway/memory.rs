//! In-memory gateway implementation - used as fallback when the hosted
//! backend is not configured, and by tests.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use board_core::error::GatewayError;
use board_core::ports::BackendGateway;

#[derive(Default)]
pub struct InMemoryGateway {
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BackendGateway for InMemoryGateway {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
    ) -> Result<String, GatewayError> {
        let mut objects = self.objects.write().await;
        objects.insert((bucket.to_string(), path.to_string()), bytes);
        Ok(format!("memory://{bucket}/{path}"))
    }

    async fn insert_row(&self, table: &str, mut record: Value) -> Result<Value, GatewayError> {
        // Assign the server-side fields a hosted backend would.
        if record.get("id").is_none_or(Value::is_null) {
            record["id"] = Value::String(Uuid::new_v4().to_string());
        }
        if record.get("created_at").is_none_or(Value::is_null) {
            record["created_at"] = Value::String(Utc::now().to_rfc3339());
        }

        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().push(record.clone());
        Ok(record)
    }

    async fn list_rows(&self, table: &str, order_desc: &str) -> Result<Vec<Value>, GatewayError> {
        let tables = self.tables.read().await;
        let mut rows = tables.get(table).cloned().unwrap_or_default();

        // RFC 3339 strings sort chronologically as plain strings.
        rows.sort_by(|a, b| {
            let ka = a.get(order_desc).and_then(Value::as_str).unwrap_or("");
            let kb = b.get(order_desc).and_then(Value::as_str).unwrap_or("");
            kb.cmp(ka)
        });

        Ok(rows)
    }

    async fn delete_row(&self, table: &str, id: Uuid) -> Result<(), GatewayError> {
        let id = id.to_string();
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|row| row.get("id").and_then(Value::as_str) != Some(id.as_str()));
        }
        Ok(())
    }

    async fn remove_object(&self, bucket: &str, path: &str) -> Result<(), GatewayError> {
        let mut objects = self.objects.write().await;
        objects.remove(&(bucket.to_string(), path.to_string()));
        Ok(())
    }
}
