use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// Result of the platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Default,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// A user-facing alert handed to the notification channel.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub icon: String,
    /// Dedup tag: a new notice with the same tag replaces the old one.
    pub tag: String,
    /// Self-dismiss after this long if the user hasn't dismissed it.
    pub ttl: Duration,
}

/// Abstraction over the platform notification surface.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Trigger the platform permission prompt and report the outcome.
    async fn request_permission(&self) -> Result<PermissionState, NotifyError>;

    /// Surface a notice. The channel honors `notice.ttl` for self-dismissal.
    async fn show(&self, notice: Notice) -> Result<(), NotifyError>;
}

/// A single shared audio resource used for the notification cue.
#[async_trait]
pub trait AudioCue: Send + Sync {
    async fn play(&self) -> Result<(), NotifyError>;
    async fn pause(&self) -> Result<(), NotifyError>;
    /// Seek back to the start of the clip.
    async fn rewind(&self) -> Result<(), NotifyError>;
}
