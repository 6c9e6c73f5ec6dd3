//! Notification dispatcher - surfaces new-update events to the user.
//!
//! All failures here are logged and swallowed: a broken notification
//! surface or audio device must never interrupt polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::domain::{MediaType, Update};
use crate::ports::{AudioCue, Notice, NotificationChannel, PermissionState};

const NOTICE_TITLE: &str = "New update 💕";
const NOTICE_FALLBACK_BODY: &str = "Check out the new update!";
const NOTICE_TAG: &str = "update-notification";
const DEFAULT_ICON: &str = "/favicon.ico";
const NOTICE_TTL: Duration = Duration::from_secs(5);

pub struct NotificationDispatcher {
    channel: Arc<dyn NotificationChannel>,
    cue: Arc<dyn AudioCue>,
    permission: RwLock<PermissionState>,
}

impl NotificationDispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>, cue: Arc<dyn AudioCue>) -> Self {
        Self {
            channel,
            cue,
            permission: RwLock::new(PermissionState::Default),
        }
    }

    /// The grant state recorded by the last permission prompt.
    pub async fn permission_state(&self) -> PermissionState {
        *self.permission.read().await
    }

    /// Run the platform permission prompt and record the outcome.
    ///
    /// On a fresh grant the audio resource is primed (play, pause,
    /// rewind) so the platform allows later autonomous playback.
    pub async fn request_permission(&self) -> PermissionState {
        match self.channel.request_permission().await {
            Ok(state) => {
                *self.permission.write().await = state;
                if state == PermissionState::Granted {
                    self.prime_audio().await;
                }
                state
            }
            Err(e) => {
                tracing::warn!(error = %e, "Notification permission prompt failed");
                self.permission_state().await
            }
        }
    }

    async fn prime_audio(&self) {
        let primed = async {
            self.cue.play().await?;
            self.cue.pause().await?;
            self.cue.rewind().await
        }
        .await;

        match primed {
            Ok(()) => tracing::debug!("Audio cue primed"),
            Err(e) => tracing::warn!(error = %e, "Audio priming failed"),
        }
    }

    /// Surface one update as a notification. No-op unless granted.
    pub async fn notify(&self, update: &Update) {
        if self.permission_state().await != PermissionState::Granted {
            return;
        }

        let body = if update.caption.is_empty() {
            NOTICE_FALLBACK_BODY.to_string()
        } else {
            update.caption.clone()
        };

        // Only images make a usable notification icon.
        let icon = match (update.media_type, update.media_url.as_deref()) {
            (MediaType::Image, Some(url)) => url.to_string(),
            _ => DEFAULT_ICON.to_string(),
        };

        let notice = Notice {
            title: NOTICE_TITLE.to_string(),
            body,
            icon,
            tag: NOTICE_TAG.to_string(),
            ttl: NOTICE_TTL,
        };

        if let Err(e) = self.channel.show(notice).await {
            tracing::warn!(update_id = %update.id, error = %e, "Failed to show notification");
        }
    }

    /// Rewind and play the shared cue. No-op unless granted.
    pub async fn play_cue(&self) {
        if self.permission_state().await != PermissionState::Granted {
            return;
        }

        let played = async {
            self.cue.rewind().await?;
            self.cue.play().await
        }
        .await;

        if let Err(e) = played {
            tracing::warn!(error = %e, "Audio cue playback failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    use super::*;
    use crate::error::NotifyError;

    struct FakeChannel {
        grant: PermissionState,
        shown: Mutex<Vec<Notice>>,
    }

    impl FakeChannel {
        fn new(grant: PermissionState) -> Self {
            Self {
                grant,
                shown: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NotificationChannel for FakeChannel {
        async fn request_permission(&self) -> Result<PermissionState, NotifyError> {
            Ok(self.grant)
        }

        async fn show(&self, notice: Notice) -> Result<(), NotifyError> {
            self.shown.lock().await.push(notice);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingCue {
        plays: AtomicUsize,
        pauses: AtomicUsize,
        rewinds: AtomicUsize,
    }

    #[async_trait]
    impl AudioCue for CountingCue {
        async fn play(&self) -> Result<(), NotifyError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn pause(&self) -> Result<(), NotifyError> {
            self.pauses.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rewind(&self) -> Result<(), NotifyError> {
            self.rewinds.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn update(caption: &str, media_type: MediaType, media_url: Option<&str>) -> Update {
        Update {
            id: Uuid::new_v4(),
            media_url: media_url.map(str::to_owned),
            media_type,
            caption: caption.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn notify_is_a_noop_without_grant() {
        for state in [PermissionState::Default, PermissionState::Denied] {
            let channel = Arc::new(FakeChannel::new(state));
            let cue = Arc::new(CountingCue::default());
            let dispatcher = NotificationDispatcher::new(channel.clone(), cue.clone());

            dispatcher.request_permission().await;
            dispatcher.notify(&update("hi", MediaType::Image, None)).await;
            dispatcher.play_cue().await;

            assert!(channel.shown.lock().await.is_empty());
            assert_eq!(cue.plays.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn granting_permission_primes_audio_once() {
        let channel = Arc::new(FakeChannel::new(PermissionState::Granted));
        let cue = Arc::new(CountingCue::default());
        let dispatcher = NotificationDispatcher::new(channel, cue.clone());

        let state = dispatcher.request_permission().await;

        assert_eq!(state, PermissionState::Granted);
        assert_eq!(cue.plays.load(Ordering::SeqCst), 1);
        assert_eq!(cue.pauses.load(Ordering::SeqCst), 1);
        assert_eq!(cue.rewinds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn notify_after_grant_builds_one_notice_from_the_caption() {
        let channel = Arc::new(FakeChannel::new(PermissionState::Granted));
        let cue = Arc::new(CountingCue::default());
        let dispatcher = NotificationDispatcher::new(channel.clone(), cue);

        assert_eq!(
            dispatcher.permission_state().await,
            PermissionState::Default
        );
        dispatcher.request_permission().await;
        dispatcher
            .notify(&update("good morning bee", MediaType::Voice, None))
            .await;

        let shown = channel.shown.lock().await;
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].body, "good morning bee");
        assert_eq!(shown[0].icon, DEFAULT_ICON);
    }

    #[tokio::test]
    async fn image_updates_use_their_media_url_as_icon() {
        let channel = Arc::new(FakeChannel::new(PermissionState::Granted));
        let cue = Arc::new(CountingCue::default());
        let dispatcher = NotificationDispatcher::new(channel.clone(), cue);

        dispatcher.request_permission().await;
        dispatcher
            .notify(&update(
                "",
                MediaType::Image,
                Some("https://cdn.example/updates/a.jpg"),
            ))
            .await;

        let shown = channel.shown.lock().await;
        assert_eq!(shown[0].icon, "https://cdn.example/updates/a.jpg");
        assert_eq!(shown[0].body, NOTICE_FALLBACK_BODY);
    }

    #[tokio::test]
    async fn play_cue_rewinds_then_plays() {
        let channel = Arc::new(FakeChannel::new(PermissionState::Granted));
        let cue = Arc::new(CountingCue::default());
        let dispatcher = NotificationDispatcher::new(channel, cue.clone());

        dispatcher.request_permission().await;
        let after_priming = cue.plays.load(Ordering::SeqCst);

        dispatcher.play_cue().await;

        assert_eq!(cue.plays.load(Ordering::SeqCst), after_priming + 1);
        assert_eq!(cue.rewinds.load(Ordering::SeqCst), 2);
    }
}
