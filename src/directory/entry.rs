//! Directory entries.

use serde::Serialize;

use crate::state::Room;
use crate::state::event::event_type;

/// Read-only snapshot of a room's publishable attributes, built from
/// persisted room state immediately before matching and discarded after
/// the listing request completes.
///
/// Text attributes are optional: "field not set" stays distinguishable
/// from "field set to the empty string", though the search matcher treats
/// both as non-matching.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDirectoryEntry {
    pub room_id: String,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub canonical_alias: Option<String>,
    pub num_joined_members: u64,
}

impl RoomDirectoryEntry {
    /// Snapshot a room's current state into a directory entry.
    pub fn from_room(room: &Room) -> Self {
        Self {
            room_id: room.id.clone(),
            name: state_text(room, event_type::NAME, "name"),
            topic: state_text(room, event_type::TOPIC, "topic"),
            canonical_alias: state_text(room, event_type::CANONICAL_ALIAS, "alias"),
            num_joined_members: room.joined_members,
        }
    }
}

/// Extract a string field from a room's state event content, if the event
/// exists and the field is a string.
fn state_text(room: &Room, event_type: &str, field: &str) -> Option<String> {
    room.get_state(event_type, "")
        .and_then(|event| event.content.get(field))
        .and_then(|value| value.as_str())
        .map(|s| s.to_string())
}
