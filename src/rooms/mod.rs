//! Room creation and room-level policy.

mod create;
mod encryption;

pub use create::{CreateRoomParams, create_room};
pub use encryption::encrypt_by_default;
