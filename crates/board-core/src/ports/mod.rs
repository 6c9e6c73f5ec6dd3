//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod gateway;
mod notify;

pub use gateway::BackendGateway;
pub use notify::{AudioCue, Notice, NotificationChannel, PermissionState};
