//! In-memory notification surface.
//!
//! Keeps every shown notice for inspection and tracks the currently
//! open ones, dismissing them when their ttl elapses. Works within a
//! single process only.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::error::NotifyError;
use board_core::ports::{AudioCue, Notice, NotificationChannel, PermissionState};

pub struct InMemoryNotificationChannel {
    grant: RwLock<PermissionState>,
    open: Arc<RwLock<Vec<Notice>>>,
    history: RwLock<Vec<Notice>>,
}

impl InMemoryNotificationChannel {
    /// `grant` is what the simulated permission prompt will answer.
    pub fn new(grant: PermissionState) -> Self {
        Self {
            grant: RwLock::new(grant),
            open: Arc::new(RwLock::new(Vec::new())),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Change what the next permission prompt answers.
    pub async fn set_grant(&self, grant: PermissionState) {
        *self.grant.write().await = grant;
    }

    /// Notices currently on screen (not yet self-dismissed).
    pub async fn open(&self) -> Vec<Notice> {
        self.open.read().await.clone()
    }

    /// Every notice ever shown.
    pub async fn history(&self) -> Vec<Notice> {
        self.history.read().await.clone()
    }
}

#[async_trait]
impl NotificationChannel for InMemoryNotificationChannel {
    async fn request_permission(&self) -> Result<PermissionState, NotifyError> {
        Ok(*self.grant.read().await)
    }

    async fn show(&self, notice: Notice) -> Result<(), NotifyError> {
        tracing::debug!(title = %notice.title, body = %notice.body, "Showing notice");
        self.history.write().await.push(notice.clone());

        let mut open = self.open.write().await;
        // Same tag replaces the previous notice.
        open.retain(|n| n.tag != notice.tag);
        open.push(notice.clone());
        drop(open);

        // Self-dismiss after the ttl.
        let open = self.open.clone();
        tokio::spawn(async move {
            tokio::time::sleep(notice.ttl).await;
            open.write().await.retain(|n| n.tag != notice.tag);
        });

        Ok(())
    }
}

/// Audio cue that only counts the operations performed on it.
#[derive(Default)]
pub struct InMemoryAudioCue {
    pub plays: AtomicUsize,
    pub pauses: AtomicUsize,
    pub rewinds: AtomicUsize,
}

#[async_trait]
impl AudioCue for InMemoryAudioCue {
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
