//! InMemory Presence Repository 実装
//!
//! ドメイン層が定義する PresenceRepository trait の具体的な実装。
//! `PresenceRegistry`（Room マップ + Room ごとのユーザーマップ）をインメモリ DB として使用します。
//! プロセス再起動で全ての状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    PresenceError, PresenceRegistry, PresenceRepository, RoomId, RoomSnapshot, Ttl, UserId,
};

/// インメモリ Presence Repository 実装
pub struct InMemoryPresenceRepository {
    /// Room マップ（Room の生成と検索はここを経由する）
    registry: Arc<PresenceRegistry>,
}

impl InMemoryPresenceRepository {
    /// 新しい InMemoryPresenceRepository を作成
    pub fn new(registry: Arc<PresenceRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl PresenceRepository for InMemoryPresenceRepository {
    async fn check_in(&self, room_id: RoomId, user_id: UserId, ttl: Ttl) {
        let room = self.registry.ensure_room(&room_id);
        room.check_in(user_id, ttl);
    }

    async fn refresh(
        &self,
        room_id: RoomId,
        user_id: UserId,
        ttl: Ttl,
    ) -> Result<(), PresenceError> {
        let room = self.registry.find_room(&room_id)?;
        room.refresh(&user_id, ttl)
    }

    async fn list_rooms(&self) -> Vec<RoomSnapshot> {
        self.registry.snapshot()
    }
}
