//! Conversion logic between DTOs and domain types.

use crate::domain::{RoomId, RoomSnapshot, UserId, ValueObjectError};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl dto::CheckInRequestDto {
    /// Validate and convert into domain identifiers.
    pub fn into_domain(self) -> Result<(RoomId, UserId), ValueObjectError> {
        Ok((RoomId::new(self.room_id)?, UserId::new(self.user_id)?))
    }
}

impl dto::UpdatePresenceRequestDto {
    /// Validate and convert into domain identifiers plus the requested TTL seconds.
    pub fn into_domain(self) -> Result<(RoomId, UserId, Option<i64>), ValueObjectError> {
        Ok((
            RoomId::new(self.room_id)?,
            UserId::new(self.user_id)?,
            self.expires_in,
        ))
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<RoomSnapshot> for dto::RoomInfoDto {
    fn from(model: RoomSnapshot) -> Self {
        Self {
            room_id: model.room_id.into_string(),
            user_ids: model
                .user_ids
                .into_iter()
                .map(UserId::into_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_request_missing_room_id() {
        // テスト項目: room_id が欠けたリクエストはエラーになる
        // given (前提条件):
        let request: dto::CheckInRequestDto =
            serde_json::from_str(r#"{"user_id":"alice"}"#).unwrap();

        // when (操作):
        let result = request.into_domain();

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomId));
    }

    #[test]
    fn test_check_in_request_missing_user_id() {
        // テスト項目: user_id が空のリクエストはエラーになる
        // given (前提条件):
        let request = dto::CheckInRequestDto {
            user_id: String::new(),
            room_id: "r1".to_string(),
        };

        // when (操作):
        let result = request.into_domain();

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyUserId));
    }

    #[test]
    fn test_update_presence_request_keeps_expires_in() {
        // テスト項目: expires_in はそのまま UseCase に渡される
        // given (前提条件):
        let request: dto::UpdatePresenceRequestDto =
            serde_json::from_str(r#"{"user_id":"bob","room_id":"r2","expires_in":10}"#).unwrap();

        // when (操作):
        let (room_id, user_id, expires_in) = request.into_domain().unwrap();

        // then (期待する結果):
        assert_eq!(room_id.as_str(), "r2");
        assert_eq!(user_id.as_str(), "bob");
        assert_eq!(expires_in, Some(10));
    }

    #[test]
    fn test_room_snapshot_to_dto() {
        // テスト項目: RoomSnapshot が RoomInfoDto に変換され、空の Room は空配列になる
        // given (前提条件):
        let snapshot = RoomSnapshot {
            room_id: RoomId::new("r1".to_string()).unwrap(),
            user_ids: vec![],
        };

        // when (操作):
        let dto = dto::RoomInfoDto::from(snapshot);
        let json = serde_json::to_value(&dto).unwrap();

        // then (期待する結果):
        assert_eq!(json, serde_json::json!({"room_id": "r1", "user_ids": []}));
    }
}
