//! UseCase layer: one struct per externally visible operation.

mod check_in;
mod error;
mod list_rooms;
mod update_presence;

pub use check_in::CheckInUseCase;
pub use error::UpdatePresenceError;
pub use list_rooms::ListRoomsUseCase;
pub use update_presence::UpdatePresenceUseCase;
