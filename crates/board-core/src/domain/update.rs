use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of media attached to an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Voice,
}

impl MediaType {
    /// Classify a MIME type by its top-level prefix.
    /// Audio clips are treated as voice messages.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else if mime.starts_with("audio/") {
            Some(Self::Voice)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Voice => "voice",
        }
    }
}

/// Update entity - one posted item on the board.
///
/// Immutable once created; the only lifecycle transition after
/// creation is full deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: Uuid,
    pub media_url: Option<String>,
    pub media_type: MediaType,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

/// The fields supplied by the upload flow; `id` and `created_at`
/// are assigned when the record is persisted.
#[derive(Debug, Clone)]
pub struct UpdateDraft {
    pub media_url: Option<String>,
    pub media_type: MediaType,
    pub caption: String,
}
