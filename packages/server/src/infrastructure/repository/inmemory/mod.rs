//! InMemory Repository 実装

mod presence;

pub use presence::InMemoryPresenceRepository;
