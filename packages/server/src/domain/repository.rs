//! Repository trait 定義
//!
//! ドメイン層が必要とするプレゼンスストアへのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{PresenceError, RoomId, RoomSnapshot, Ttl, UserId};

/// Presence Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// ユーザーを Room に check-in する（Room が無ければ作成）
    async fn check_in(&self, room_id: RoomId, user_id: UserId, ttl: Ttl);

    /// 既存ユーザーの TTL を更新する
    async fn refresh(&self, room_id: RoomId, user_id: UserId, ttl: Ttl)
    -> Result<(), PresenceError>;

    /// 全 Room の有効なユーザー一覧を取得（期限切れエントリはこの時に削除される）
    async fn list_rooms(&self) -> Vec<RoomSnapshot>;
}
