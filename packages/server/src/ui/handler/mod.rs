//! HTTP handlers.

mod error;
mod http;

pub use http::{check_in, health_check, list_rooms, update_presence};
