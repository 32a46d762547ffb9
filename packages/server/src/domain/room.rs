//! Room: one room's user presence set behind its own lock domain.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use presence_shared::time::{Clock, to_utc_rfc3339};

use super::{
    entity::UserEntry,
    error::PresenceError,
    lock::ExclusiveLock,
    value_object::{RoomId, Ttl, UserId},
};

/// User id → presence entry.
pub type UserMap = HashMap<UserId, UserEntry>;

/// A named room holding its users' presence entries.
///
/// Every access to the user map goes through a single [`ExclusiveLock`]; check-in,
/// refresh and the evicting enumeration are mutually exclusive with each other.
pub struct Room<M = Mutex<UserMap>> {
    id: RoomId,
    clock: Arc<dyn Clock>,
    users: M,
}

impl<M: ExclusiveLock<UserMap>> Room<M> {
    pub fn new(id: RoomId, clock: Arc<dyn Clock>) -> Self {
        Self {
            id,
            clock,
            users: M::new(UserMap::new()),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Insert or overwrite `user_id`'s entry with `expires_at = now + ttl`.
    pub fn check_in(&self, user_id: UserId, ttl: Ttl) {
        let entry = UserEntry::new(user_id.clone(), self.clock.now(), ttl);
        tracing::trace!(
            "User '{}' present in room '{}' until {}",
            user_id,
            self.id,
            to_utc_rfc3339(entry.expires_at)
        );
        self.users.with_lock(|users| {
            users.insert(user_id, entry);
        });
    }

    /// Overwrite the expiry of an existing entry.
    ///
    /// Expiry is not checked here: an expired entry that has not been evicted yet
    /// still counts as present and is revived.
    pub fn refresh(&self, user_id: &UserId, ttl: Ttl) -> Result<(), PresenceError> {
        let entry = UserEntry::new(user_id.clone(), self.clock.now(), ttl);
        let expires_at = entry.expires_at;
        self.users.with_lock(|users| match users.get_mut(user_id) {
            Some(slot) => {
                *slot = entry;
                tracing::trace!(
                    "User '{}' in room '{}' refreshed until {}",
                    user_id,
                    self.id,
                    to_utc_rfc3339(expires_at)
                );
                Ok(())
            }
            None => Err(PresenceError::UserNotFound {
                room_id: self.id.clone(),
                user_id: user_id.clone(),
            }),
        })
    }

    /// Collect the users still active at `now`, removing every expired entry.
    ///
    /// This is the only place entries are ever removed.
    pub fn active_users(&self, now: DateTime<Utc>) -> Vec<UserId> {
        let (active, evicted) = self.users.with_lock(|users| {
            let before = users.len();
            let mut active = Vec::with_capacity(before);
            users.retain(|user_id, entry| {
                if entry.is_expired(now) {
                    false
                } else {
                    active.push(user_id.clone());
                    true
                }
            });
            let evicted = before - users.len();
            (active, evicted)
        });

        if evicted > 0 {
            tracing::debug!("Evicted {} expired user(s) from room '{}'", evicted, self.id);
        }
        active
    }

    /// Number of entries currently stored, expired or not. Does not evict.
    pub fn user_count(&self) -> usize {
        self.users.with_lock(|users| users.len())
    }

    /// Stored expiry of `user_id`, if an entry exists. Does not evict.
    pub fn expires_at(&self, user_id: &UserId) -> Option<DateTime<Utc>> {
        self.users
            .with_lock(|users| users.get(user_id).map(|entry| entry.expires_at))
    }
}
