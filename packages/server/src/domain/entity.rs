//! Presence entities.

use chrono::{DateTime, Utc};

use super::value_object::{RoomId, Ttl, UserId};

/// A user's presence inside one room.
///
/// Entries are replaced wholesale on every check-in or refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl UserEntry {
    /// Build an entry expiring `ttl` after `now`.
    ///
    /// Saturates at the maximum representable instant instead of overflowing.
    pub fn new(id: UserId, now: DateTime<Utc>, ttl: Ttl) -> Self {
        let expires_at = now
            .checked_add_signed(ttl.as_delta())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { id, expires_at }
    }

    /// An entry is expired once `expires_at` is at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Active users of one room as observed by a snapshot pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub user_ids: Vec<UserId>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_user_entry_expires_at_boundary() {
        // テスト項目: expires_at と同時刻で期限切れとみなされる
        // given (前提条件):
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let entry = UserEntry::new(user("alice"), now, Ttl::from_secs(300).unwrap());

        // then (期待する結果):
        assert!(!entry.is_expired(now + TimeDelta::seconds(299)));
        assert!(entry.is_expired(now + TimeDelta::seconds(300)));
        assert!(entry.is_expired(now + TimeDelta::seconds(301)));
    }

    #[test]
    fn test_user_entry_saturates_on_overflow() {
        // テスト項目: 巨大な TTL でもオーバーフローせず最大時刻に丸められる
        // given (前提条件):
        let now = DateTime::<Utc>::MAX_UTC - TimeDelta::seconds(1);

        // when (操作):
        let entry = UserEntry::new(user("alice"), now, Ttl::from_secs(3600).unwrap());

        // then (期待する結果):
        assert_eq!(entry.expires_at, DateTime::<Utc>::MAX_UTC);
    }
}
