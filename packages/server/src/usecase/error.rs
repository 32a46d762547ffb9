//! UseCase errors.

use thiserror::Error;

use crate::domain::{PresenceError, ValueObjectError};

/// Update-presence errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdatePresenceError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValueObjectError),

    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("user '{user_id}' not found in room '{room_id}'")]
    UserNotFound { room_id: String, user_id: String },
}

impl From<PresenceError> for UpdatePresenceError {
    fn from(err: PresenceError) -> Self {
        match err {
            PresenceError::RoomNotFound(room_id) => Self::RoomNotFound(room_id.into_string()),
            PresenceError::UserNotFound { room_id, user_id } => Self::UserNotFound {
                room_id: room_id.into_string(),
                user_id: user_id.into_string(),
            },
        }
    }
}
