//! Domain layer: presence entities, the two-level registry and its contracts.

pub mod entity;
pub mod error;
pub mod lock;
pub mod policy;
pub mod registry;
pub mod repository;
pub mod room;
pub mod value_object;

pub use entity::{RoomSnapshot, UserEntry};
pub use error::{PresenceError, ValueObjectError};
pub use lock::{ExclusiveLock, SharedLock};
pub use policy::{DEFAULT_TTL_SECS, TtlPolicy};
pub use registry::{PresenceRegistry, RoomMap};
pub use repository::PresenceRepository;
pub use room::{Room, UserMap};
pub use value_object::{RoomId, Ttl, UserId};
