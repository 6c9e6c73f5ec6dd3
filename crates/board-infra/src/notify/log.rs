//! Log-only notification surface for headless deployments.
//!
//! A server process has no platform prompt to show, so the channel
//! auto-grants and notices land in the structured log; SSE/WebSocket
//! delivery can be layered on top of the same port later.

use async_trait::async_trait;

use board_core::error::NotifyError;
use board_core::ports::{AudioCue, Notice, NotificationChannel, PermissionState};

#[derive(Default)]
pub struct TracingNotificationChannel;

#[async_trait]
impl NotificationChannel for TracingNotificationChannel {
    async fn request_permission(&self) -> Result<PermissionState, NotifyError> {
        Ok(PermissionState::Granted)
    }

    async fn show(&self, notice: Notice) -> Result<(), NotifyError> {
        tracing::info!(
            title = %notice.title,
            body = %notice.body,
            icon = %notice.icon,
            "Notification"
        );
        Ok(())
    }
}

/// No audio device on a server; every operation succeeds quietly.
#[derive(Default)]
pub struct SilentAudioCue;

#[async_trait]
impl AudioCue for SilentAudioCue {
    async fn play(&self) -> Result<(), NotifyError> {
        tracing::debug!("Audio cue play");
        Ok(())
    }

    async fn pause(&self) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn rewind(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}
