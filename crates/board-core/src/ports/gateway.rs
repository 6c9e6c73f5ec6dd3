use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::GatewayError;

/// Abstraction over the hosted object-storage + row-store backend.
///
/// The backend owns persistence, auth, and schema; this trait is the
/// thin request/response contract the rest of the system consumes.
/// Rows travel as untyped JSON; the repository layer decodes them.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Upload an object and return its public URL.
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>)
    -> Result<String, GatewayError>;

    /// Insert a row and return the stored record (with server-assigned fields).
    async fn insert_row(&self, table: &str, record: Value) -> Result<Value, GatewayError>;

    /// List all rows, ordered descending by the given field.
    async fn list_rows(&self, table: &str, order_desc: &str) -> Result<Vec<Value>, GatewayError>;

    /// Delete the row with the given id.
    async fn delete_row(&self, table: &str, id: Uuid) -> Result<(), GatewayError>;

    /// Remove a stored object.
    async fn remove_object(&self, bucket: &str, path: &str) -> Result<(), GatewayError>;
}
