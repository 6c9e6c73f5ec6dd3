//! # Board Shared
//!
//! Types shared between the server and its API consumers, plus the
//! display helpers the feed uses.

pub mod dto;
pub mod response;
pub mod time;

pub use response::{ApiResponse, ErrorResponse};
