//! Infrastructure layer: concrete repository and transport DTOs.

pub mod dto;
pub mod repository;
