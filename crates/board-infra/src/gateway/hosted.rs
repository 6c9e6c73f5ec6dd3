//! Gateway adapter for a hosted storage + row-store service
//! (Supabase-compatible REST surface).

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use uuid::Uuid;

use board_core::error::GatewayError;
use board_core::ports::BackendGateway;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct HostedGatewayConfig {
    /// Project base URL, without a trailing slash.
    pub base_url: String,
    /// API key, sent both as bearer token and `apikey` header.
    pub api_key: String,
}

pub struct HostedGateway {
    http: HttpClient,
    config: HostedGatewayConfig,
}

impl HostedGateway {
    pub fn new(config: HostedGatewayConfig) -> Self {
        Self {
            http: HttpClient::new(),
            config,
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{path}", self.config.base_url)
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{path}",
            self.config.base_url
        )
    }

    fn rows_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
    }

    async fn ensure_ok(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        Err(GatewayError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Network(e.to_string())
}

#[async_trait]
impl BackendGateway for HostedGateway {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
    ) -> Result<String, GatewayError> {
        let resp = self
            .authed(self.http.post(self.object_url(bucket, path)))
            .body(bytes)
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_ok(resp).await?;

        Ok(self.public_url(bucket, path))
    }

    async fn insert_row(&self, table: &str, record: Value) -> Result<Value, GatewayError> {
        let resp = self
            .authed(self.http.post(self.rows_url(table)))
            .header("Prefer", "return=representation")
            .json(&Value::Array(vec![record]))
            .send()
            .await
            .map_err(transport)?;

        let mut rows: Vec<Value> = Self::ensure_ok(resp)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        if rows.is_empty() {
            return Err(GatewayError::Decode(
                "insert returned no representation".into(),
            ));
        }
        Ok(rows.remove(0))
    }

    async fn list_rows(&self, table: &str, order_desc: &str) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}?select=*&order={order_desc}.desc", self.rows_url(table));
        let resp = self
            .authed(self.http.get(url))
            .send()
            .await
            .map_err(transport)?;

        Self::ensure_ok(resp)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn delete_row(&self, table: &str, id: Uuid) -> Result<(), GatewayError> {
        let url = format!("{}?id=eq.{id}", self.rows_url(table));
        let resp = self
            .authed(self.http.delete(url))
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_ok(resp).await?;
        Ok(())
    }

    async fn remove_object(&self, bucket: &str, path: &str) -> Result<(), GatewayError> {
        let resp = self
            .authed(self.http.delete(self.object_url(bucket, path)))
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_ok(resp).await?;
        Ok(())
    }
}
