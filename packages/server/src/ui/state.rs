//! Server state shared by handlers.

use std::sync::Arc;

use crate::usecase::{CheckInUseCase, ListRoomsUseCase, UpdatePresenceUseCase};

/// Shared application state
pub struct AppState {
    /// CheckInUseCase（check-in のユースケース）
    pub check_in_usecase: Arc<CheckInUseCase>,
    /// UpdatePresenceUseCase（プレゼンス更新のユースケース）
    pub update_presence_usecase: Arc<UpdatePresenceUseCase>,
    /// ListRoomsUseCase（Room 一覧取得のユースケース）
    pub list_rooms_usecase: Arc<ListRoomsUseCase>,
}
