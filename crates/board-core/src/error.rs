//! Domain-level error types.

use thiserror::Error;

/// Errors coming back from the hosted backend gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Backend unreachable: {0}")]
    Network(String),

    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Malformed record: {0}")]
    Decode(String),
}

/// Errors from the notification channel or audio device.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification permission not granted")]
    PermissionDenied,

    #[error("Media unavailable: {0}")]
    Media(String),
}
