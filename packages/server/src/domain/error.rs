//! Domain errors.

use thiserror::Error;

use super::value_object::{RoomId, UserId};

/// Value object construction errors.
///
/// The transport layer maps every variant to `InvalidRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("room_id must not be empty")]
    EmptyRoomId,

    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("ttl must be positive, got {0}s")]
    NonPositiveTtl(i64),

    #[error("ttl of {0}s is out of range")]
    TtlOutOfRange(i64),
}

/// Presence store errors. Terminal for the triggering request; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    #[error("room '{0}' not found")]
    RoomNotFound(RoomId),

    #[error("user '{user_id}' not found in room '{room_id}'")]
    UserNotFound { room_id: RoomId, user_id: UserId },
}
