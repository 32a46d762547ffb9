//! UseCase: ユーザーの check-in
//!
//! Room が存在しなければ作成し、ユーザーをデフォルト TTL で登録（上書き）する。

use std::sync::Arc;

use crate::domain::{PresenceRepository, RoomId, TtlPolicy, UserId};

/// check-in のユースケース
pub struct CheckInUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// TTL の決定ルール
    ttl_policy: TtlPolicy,
}

impl CheckInUseCase {
    /// 新しい CheckInUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>, ttl_policy: TtlPolicy) -> Self {
        Self {
            repository,
            ttl_policy,
        }
    }

    /// check-in を実行
    ///
    /// 新規・再 check-in の区別はなく、常に成功する。
    pub async fn execute(&self, room_id: RoomId, user_id: UserId) {
        let ttl = self.ttl_policy.check_in_ttl();
        tracing::debug!(
            "Checking in user '{}' to room '{}' (ttl {}s)",
            user_id,
            room_id,
            ttl.as_secs()
        );
        self.repository.check_in(room_id, user_id, ttl).await;
    }
}
