//! In-memory room presence server library.
//!
//! Users are checked into named rooms with a time-to-live; listing rooms lazily
//! evicts entries whose TTL has elapsed.

pub mod config;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
