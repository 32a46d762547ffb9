//! Data Transfer Objects (DTOs) for the presence server.
//!
//! - `http`: HTTP API request/response DTOs
//! - `conversion`: DTO ↔ domain conversion

pub mod conversion;
pub mod http;
