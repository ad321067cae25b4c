//! State management module.
//!
//! Contains room state (visibility, state events) and the shared store.

pub mod event;
mod room;
mod store;

pub use room::{Room, RoomId, RoomIdGenerator, RoomVisibility};
pub use store::{RoomStateStore, StateError};
