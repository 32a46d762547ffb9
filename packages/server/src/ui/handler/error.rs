//! Mapping from use case errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::ValueObjectError, infrastructure::dto::http::ErrorResponseDto,
    usecase::UpdatePresenceError,
};

/// Error returned by the HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or missing/empty required field (400)
    InvalidRequest(String),
    /// Refresh targeted an unknown room (404)
    RoomNotFound(String),
    /// Refresh targeted a user absent from the room (404)
    UserNotFound(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            Self::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, "invalid_request", message.as_str())
            }
            Self::RoomNotFound(message) => {
                (StatusCode::NOT_FOUND, "room_not_found", message.as_str())
            }
            Self::UserNotFound(message) => {
                (StatusCode::NOT_FOUND, "user_not_found", message.as_str())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = self.parts();
        tracing::warn!("Request failed with {}: {}", status, message);
        let body = ErrorResponseDto {
            error: kind.to_string(),
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidRequest(format!("malformed JSON body: {}", err))
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(err: ValueObjectError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<UpdatePresenceError> for ApiError {
    fn from(err: UpdatePresenceError) -> Self {
        let message = err.to_string();
        match err {
            UpdatePresenceError::InvalidRequest(_) => Self::InvalidRequest(message),
            UpdatePresenceError::RoomNotFound(_) => Self::RoomNotFound(message),
            UpdatePresenceError::UserNotFound { .. } => Self::UserNotFound(message),
        }
    }
}
