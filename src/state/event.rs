//! State events and their type identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State event type identifiers written or read by this crate.
pub mod event_type {
    /// The room creation event, first event in every room.
    pub const CREATE: &str = "m.room.create";
    /// Room encryption configuration.
    pub const ENCRYPTION: &str = "m.room.encryption";
    /// Human-readable room name.
    pub const NAME: &str = "m.room.name";
    /// Room topic.
    pub const TOPIC: &str = "m.room.topic";
    /// Canonical room alias.
    pub const CANONICAL_ALIAS: &str = "m.room.canonical_alias";
}

/// Supported end-to-end encryption algorithm identifiers.
pub mod encryption_algorithm {
    /// Megolm group ratchet, the only algorithm rooms are encrypted with.
    pub const MEGOLM_V1_AES_SHA2: &str = "m.megolm.v1.aes-sha2";
    /// The server-wide default algorithm for auto-encrypted rooms.
    pub const DEFAULT: &str = MEGOLM_V1_AES_SHA2;
}

/// A piece of persisted, typed room configuration, distinct from ordinary
/// messages. Keyed by `(event_type, state_key)` within a room; a later
/// event with the same key replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEvent {
    pub event_type: String,
    pub state_key: String,
    pub sender: String,
    /// Unix milliseconds at creation.
    pub origin_server_ts: i64,
    pub content: Value,
}

impl StateEvent {
    /// Build a state event with an empty state key, timestamped now.
    pub fn new(event_type: &str, sender: &str, content: Value) -> Self {
        Self {
            event_type: event_type.to_string(),
            state_key: String::new(),
            sender: sender.to_string(),
            origin_server_ts: chrono::Utc::now().timestamp_millis(),
            content,
        }
    }
}

/// Content of an `m.room.encryption` state event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncryptionEventContent {
    /// The encryption algorithm identifier, e.g. "m.megolm.v1.aes-sha2".
    pub algorithm: String,
}

impl EncryptionEventContent {
    /// Content carrying the server's default algorithm.
    pub fn with_default_algorithm() -> Self {
        Self {
            algorithm: encryption_algorithm::DEFAULT.to_string(),
        }
    }
}
