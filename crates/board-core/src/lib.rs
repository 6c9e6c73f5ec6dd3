//! # Board Core
//!
//! The domain layer of the update board.
//! Entities, ports, and the polling/notification logic, with zero
//! infrastructure dependencies.

pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod poller;
pub mod ports;
pub mod repository;

pub use dispatcher::NotificationDispatcher;
pub use error::{GatewayError, NotifyError};
pub use poller::UpdatePoller;
pub use repository::UpdateRepository;
