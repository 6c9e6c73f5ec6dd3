//! # Board Infra
//!
//! Adapter implementations for the ports defined in `board-core`:
//! the hosted storage + row-store gateway, an in-memory fallback, and
//! the notification surfaces.

pub mod gateway;
pub mod notify;
