//! Fixed-cadence feed polling on top of tokio-cron-scheduler.

use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use board_core::UpdatePoller;

/// Drives `poller.refresh()` once immediately, then on a fixed cadence
/// until shutdown.
pub struct PollScheduler {
    inner: JobScheduler,
}

impl PollScheduler {
    pub async fn start(
        poller: Arc<UpdatePoller>,
        every: Duration,
    ) -> Result<Self, JobSchedulerError> {
        // First poll fires right away so the feed is warm before the
        // cadence kicks in.
        poller.refresh().await;

        let inner = JobScheduler::new().await?;

        let secs = every.as_secs().clamp(1, 59);
        let schedule = format!("*/{secs} * * * * *");
        let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
            let poller = poller.clone();
            Box::pin(async move {
                poller.refresh().await;
            })
        })?;

        let id = inner.add(job).await?;
        inner.start().await?;
        tracing::info!(cadence_secs = secs, job_id = %id, "Feed polling started");

        Ok(Self { inner })
    }

    /// Stop the cadence; no refresh fires after this returns.
    pub async fn shutdown(&mut self) -> Result<(), JobSchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!("Feed polling stopped");
        Ok(())
    }
}
