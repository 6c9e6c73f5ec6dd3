//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// One update as the feed renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDto {
    pub id: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub media_type: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Human-friendly age, e.g. `3h ago`.
    pub age: String,
}

/// The cached feed plus its loading flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub updates: Vec<UpdateDto>,
    pub loading: bool,
}

/// Current notification permission state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionResponse {
    pub permission: String,
}
