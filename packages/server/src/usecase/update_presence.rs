//! UseCase: プレゼンスの更新（refresh）
//!
//! 既存 Room の既存ユーザーの有効期限を上書きする。Room もユーザーも作成しない。

use std::sync::Arc;

use crate::domain::{PresenceRepository, RoomId, TtlPolicy, UserId};

use super::error::UpdatePresenceError;

/// プレゼンス更新のユースケース
pub struct UpdatePresenceUseCase {
    repository: Arc<dyn PresenceRepository>,
    ttl_policy: TtlPolicy,
}

impl UpdatePresenceUseCase {
    pub fn new(repository: Arc<dyn PresenceRepository>, ttl_policy: TtlPolicy) -> Self {
        Self {
            repository,
            ttl_policy,
        }
    }

    /// プレゼンス更新を実行
    ///
    /// # Arguments
    ///
    /// * `expires_in` - 秒単位の TTL。正の値でなければデフォルト TTL を使う
    ///
    /// # Returns
    ///
    /// * `Err(UpdatePresenceError::RoomNotFound)` - Room が存在しない
    /// * `Err(UpdatePresenceError::UserNotFound)` - Room にユーザーがいない
    /// * `Err(UpdatePresenceError::InvalidRequest)` - TTL が表現できない大きさ
    pub async fn execute(
        &self,
        room_id: RoomId,
        user_id: UserId,
        expires_in: Option<i64>,
    ) -> Result<(), UpdatePresenceError> {
        let ttl = self.ttl_policy.refresh_ttl(expires_in)?;
        tracing::debug!(
            "Refreshing user '{}' in room '{}' (ttl {}s)",
            user_id,
            room_id,
            ttl.as_secs()
        );
        self.repository.refresh(room_id, user_id, ttl).await?;
        Ok(())
    }
}
