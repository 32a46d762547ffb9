//! Presence registry: room id → room, behind a lock domain independent of the rooms'.

use std::{collections::HashMap, marker::PhantomData, sync::Arc};

use parking_lot::{Mutex, RwLock};
use presence_shared::time::Clock;

use super::{
    entity::RoomSnapshot,
    error::PresenceError,
    lock::{ExclusiveLock, SharedLock},
    room::{Room, UserMap},
    value_object::RoomId,
};

/// Room id → shared room handle.
pub type RoomMap<M> = HashMap<RoomId, Arc<Room<M>>>;

/// The authoritative store of all rooms.
///
/// Constructed explicitly and shared by reference (usually `Arc`). Rooms are created
/// on demand and live as long as the registry; empty rooms are never removed.
///
/// ## Lock discipline
///
/// The room map lock is never held while a room's user lock is taken. Callers get an
/// `Arc<Room>` out of the map, the map lock is released, and only then is the room
/// touched.
pub struct PresenceRegistry<M = Mutex<UserMap>, L = RwLock<RoomMap<M>>> {
    rooms: L,
    clock: Arc<dyn Clock>,
    _room_lock: PhantomData<fn() -> M>,
}

impl<M, L> PresenceRegistry<M, L>
where
    M: ExclusiveLock<UserMap>,
    L: SharedLock<RoomMap<M>>,
{
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: L::new(RoomMap::new()),
            clock,
            _room_lock: PhantomData,
        }
    }

    /// Return the room for `room_id`, creating it if it does not exist yet.
    ///
    /// Creation happens under the write lock with a re-check, so concurrent callers for
    /// the same unseen id all receive the single winning room.
    pub fn ensure_room(&self, room_id: &RoomId) -> Arc<Room<M>> {
        if let Some(room) = self.rooms.read(|rooms| rooms.get(room_id).cloned()) {
            return room;
        }

        self.rooms.write(|rooms| {
            rooms
                .entry(room_id.clone())
                .or_insert_with(|| {
                    tracing::info!("Room '{}' created", room_id);
                    Arc::new(Room::new(room_id.clone(), self.clock.clone()))
                })
                .clone()
        })
    }

    /// Look up an existing room without creating it.
    pub fn find_room(&self, room_id: &RoomId) -> Result<Arc<Room<M>>, PresenceError> {
        self.rooms
            .read(|rooms| rooms.get(room_id).cloned())
            .ok_or_else(|| PresenceError::RoomNotFound(room_id.clone()))
    }

    /// Visit every room, evicting expired users and collecting the active ones.
    ///
    /// The room map read lock is held only long enough to copy out the room handles;
    /// per-room eviction runs after it is released. Rooms with no active users are
    /// still reported. Order is unspecified.
    pub fn snapshot(&self) -> Vec<RoomSnapshot> {
        let now = self.clock.now();
        let rooms: Vec<Arc<Room<M>>> = self.rooms.read(|rooms| rooms.values().cloned().collect());

        rooms
            .into_iter()
            .map(|room| RoomSnapshot {
                room_id: room.id().clone(),
                user_ids: room.active_users(now),
            })
            .collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.read(|rooms| rooms.len())
    }
}
