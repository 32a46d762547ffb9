//! Shared utilities for the presence server.

pub mod logger;
pub mod time;
