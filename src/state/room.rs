//! Room state and identifiers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::event::StateEvent;

/// Unique room identifier (`!opaque:server.name`).
pub type RoomId = String;

/// Whether a room is publicly listed or invite-only.
///
/// Determined once, at room-creation time, from the creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomVisibility {
    /// Listed in the public room directory.
    Public,
    /// Joinable by invitation only, not listed.
    InviteOnly,
}

impl RoomVisibility {
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Generates unique room IDs.
///
/// Format: `!` + counter in base36 + `:` + server name.
/// Example: "!AAAAAC:hearth.example.com"
pub struct RoomIdGenerator {
    server_name: String,
    counter: AtomicU64,
}

impl RoomIdGenerator {
    /// Create a new room ID generator for the given server name.
    pub fn new(server_name: String) -> Self {
        Self {
            server_name,
            counter: AtomicU64::new(0),
        }
    }

    /// Generate the next unique room ID.
    pub fn next(&self) -> RoomId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("!{}:{}", base36_encode_6(n), self.server_name)
    }
}

/// Encode a number as a 6-character base36 string.
fn base36_encode_6(mut n: u64) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut result = [b'A'; 6];

    for i in (0..6).rev() {
        result[i] = CHARS[(n % 36) as usize];
        n /= 36;
    }

    String::from_utf8_lossy(&result).into_owned()
}

/// A room's in-memory state: visibility class, member count, and the
/// current state events keyed by `(event_type, state_key)`.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub visibility: RoomVisibility,
    /// Number of joined members, maintained by the membership machinery.
    pub joined_members: u64,
    state: HashMap<(String, String), StateEvent>,
}

impl Room {
    /// A fresh room with the creator as its only member and no state yet.
    pub fn new(id: RoomId, visibility: RoomVisibility) -> Self {
        Self {
            id,
            visibility,
            joined_members: 1,
            state: HashMap::new(),
        }
    }

    /// Insert a state event, replacing any event with the same
    /// `(event_type, state_key)` pair.
    pub fn put_state(&mut self, event: StateEvent) {
        self.state
            .insert((event.event_type.clone(), event.state_key.clone()), event);
    }

    /// Current state event for `(event_type, state_key)`, if one was set.
    pub fn get_state(&self, event_type: &str, state_key: &str) -> Option<&StateEvent> {
        self.state
            .get(&(event_type.to_string(), state_key.to_string()))
    }

    /// Whether this room appears in the public directory.
    pub fn is_published(&self) -> bool {
        self.visibility.is_public()
    }
}
