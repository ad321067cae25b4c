//! hearthd-core - Hearth chat daemon room policy core.
//!
//! The decision layer of a federated chat-room server: which rooms a
//! directory search returns, and whether a newly created room gets
//! encryption enabled by default. The HTTP surface, persistence, and
//! federation live in other crates and call into this one.

pub mod config;
pub mod directory;
pub mod rooms;
pub mod state;

pub use crate::config::Config;
pub use crate::state::RoomStateStore;
