//! The shared room-state store.
//!
//! Holds every room in concurrent data structures accessible from any
//! async task, mirroring how the rest of the server shares state.

use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use super::event::StateEvent;
use super::room::{Room, RoomId};

/// Errors surfaced by state lookups.
///
/// `NotFound` is deliberate API surface: callers translate it into a
/// 404-equivalent so "never set" stays distinguishable from any default
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no such room: {0}")]
    NoSuchRoom(RoomId),
    #[error("state event not found: {event_type} (state_key '{state_key}')")]
    NotFound {
        event_type: String,
        state_key: String,
    },
}

/// Central shared store of all rooms, indexed by room ID.
#[derive(Default)]
pub struct RoomStateStore {
    rooms: DashMap<RoomId, Arc<RwLock<Room>>>,
}

impl RoomStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room, returning the shared handle.
    pub fn insert(&self, room: Room) -> Arc<RwLock<Room>> {
        let id = room.id.clone();
        let handle = Arc::new(RwLock::new(room));
        self.rooms.insert(id, handle.clone());
        handle
    }

    /// Shared handle to a room, if it exists.
    pub fn room(&self, room_id: &str) -> Option<Arc<RwLock<Room>>> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    /// Current content of a state event in a room.
    ///
    /// Returns `StateError::NotFound` when the room never received an event
    /// of that type and key.
    pub async fn get_state(
        &self,
        room_id: &str,
        event_type: &str,
        state_key: &str,
    ) -> Result<StateEvent, StateError> {
        let handle = self
            .room(room_id)
            .ok_or_else(|| StateError::NoSuchRoom(room_id.to_string()))?;
        let room = handle.read().await;
        room.get_state(event_type, state_key)
            .cloned()
            .ok_or_else(|| StateError::NotFound {
                event_type: event_type.to_string(),
                state_key: state_key.to_string(),
            })
    }

    /// Append a state event to an existing room.
    pub async fn put_state(&self, room_id: &str, event: StateEvent) -> Result<(), StateError> {
        let handle = self
            .room(room_id)
            .ok_or_else(|| StateError::NoSuchRoom(room_id.to_string()))?;
        handle.write().await.put_state(event);
        Ok(())
    }

    /// Handles to every room in the store.
    ///
    /// Snapshot semantics: rooms inserted while a caller iterates the
    /// result are not retroactively included.
    pub fn rooms(&self) -> Vec<Arc<RwLock<Room>>> {
        self.rooms
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
