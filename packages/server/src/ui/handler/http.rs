//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};

use crate::{
    infrastructure::dto::http::{
        CheckInRequestDto, ConfirmationDto, RoomInfoDto, UpdatePresenceRequestDto,
    },
    ui::state::AppState,
};

use super::error::ApiError;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Check a user into a room, creating the room on first use
///
/// The body is decoded as JSON regardless of `Content-Type`.
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConfirmationDto>, ApiError> {
    let request: CheckInRequestDto = serde_json::from_slice(&body?)?;
    let (room_id, user_id) = request.into_domain()?;

    state
        .check_in_usecase
        .execute(room_id.clone(), user_id.clone())
        .await;
    tracing::info!("User '{}' checked in to room '{}'", user_id, room_id);

    Ok(Json(ConfirmationDto {
        message: format!("User {} checked in to room {}", user_id, room_id),
        user_id: user_id.into_string(),
        room_id: room_id.into_string(),
    }))
}

/// Refresh an existing user's presence TTL
pub async fn update_presence(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConfirmationDto>, ApiError> {
    let request: UpdatePresenceRequestDto = serde_json::from_slice(&body?)?;
    let (room_id, user_id, expires_in) = request.into_domain()?;

    state
        .update_presence_usecase
        .execute(room_id.clone(), user_id.clone(), expires_in)
        .await?;
    tracing::info!("Presence of user '{}' in room '{}' updated", user_id, room_id);

    Ok(Json(ConfirmationDto {
        message: format!("Presence of user {} in room {} updated", user_id, room_id),
        user_id: user_id.into_string(),
        room_id: room_id.into_string(),
    }))
}

/// List rooms with their active users (evicts expired users as a side effect)
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomInfoDto>> {
    let rooms = state.list_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(rooms.into_iter().map(RoomInfoDto::from).collect())
}
