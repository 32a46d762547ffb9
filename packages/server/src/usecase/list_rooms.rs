//! UseCase: Room 一覧の取得
//!
//! 期限切れユーザーの削除（遅延削除）は Repository の list_rooms の中で行われる。

use std::sync::Arc;

use crate::domain::{PresenceRepository, RoomSnapshot};

/// Room 一覧取得のユースケース
pub struct ListRoomsUseCase {
    repository: Arc<dyn PresenceRepository>,
}

impl ListRoomsUseCase {
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// Room 一覧を取得
    ///
    /// # Returns
    ///
    /// room_id 順、各 Room 内は user_id 順にソートされた一覧（空の Room も含む）
    pub async fn execute(&self) -> Vec<RoomSnapshot> {
        let mut rooms = self.repository.list_rooms().await;

        // Sort for consistent output
        rooms.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        for room in &mut rooms {
            room.user_ids.sort();
        }

        rooms
    }
}
