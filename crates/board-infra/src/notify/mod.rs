//! Notification surface adapters.

mod log;
mod memory;

pub use log::{SilentAudioCue, TracingNotificationChannel};
pub use memory::{InMemoryAudioCue, InMemoryNotificationChannel};
