//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// `POST /checkin` body
///
/// Missing fields deserialize to empty strings and are rejected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRequestDto {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub room_id: String,
}

/// `POST /update_presence` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePresenceRequestDto {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub room_id: String,
    /// TTL in whole seconds; non-positive or absent means the server default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// Confirmation returned by check-in and update-presence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationDto {
    pub message: String,
    pub user_id: String,
    pub room_id: String,
}

/// One entry of `GET /list_rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfoDto {
    pub room_id: String,
    pub user_ids: Vec<String>,
}

/// Error body for 4xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    /// Machine-readable kind: `invalid_request`, `room_not_found`, `user_not_found`
    pub error: String,
    pub message: String,
}
