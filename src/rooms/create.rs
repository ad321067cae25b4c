//! Room creation pipeline.
//!
//! Allocates a room id, writes the initial state events, and applies the
//! server's encryption-default policy. Membership, power levels, and
//! invite dispatch live in the membership machinery, not here.

use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::state::event::{EncryptionEventContent, StateEvent, event_type};
use crate::state::{Room, RoomId, RoomIdGenerator, RoomStateStore, RoomVisibility};

/// Caller-supplied parameters for a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    /// Fully qualified creator user id (`@localpart:server`).
    pub creator: String,
    pub visibility: RoomVisibility,
    pub name: Option<String>,
    pub topic: Option<String>,
    /// Canonical alias (`#localpart:server`), already reserved by the
    /// alias machinery.
    pub canonical_alias: Option<String>,
}

impl CreateRoomParams {
    /// Parameters for a bare room with no optional attributes.
    pub fn new(creator: &str, visibility: RoomVisibility) -> Self {
        Self {
            creator: creator.to_string(),
            visibility,
            name: None,
            topic: None,
            canonical_alias: None,
        }
    }
}

/// Create a room and write its initial state events into the store.
///
/// Emits `m.room.create` first, then the optional attribute events, then
/// `m.room.encryption` when the server policy calls for it. Returns the
/// new room's id.
pub async fn create_room(
    store: &RoomStateStore,
    id_gen: &RoomIdGenerator,
    config: &Config,
    params: CreateRoomParams,
) -> RoomId {
    let room_id = id_gen.next();
    let mut room = Room::new(room_id.clone(), params.visibility);

    room.put_state(StateEvent::new(
        event_type::CREATE,
        &params.creator,
        json!({ "creator": params.creator }),
    ));

    if let Some(ref name) = params.name {
        room.put_state(StateEvent::new(
            event_type::NAME,
            &params.creator,
            json!({ "name": name }),
        ));
    }
    if let Some(ref topic) = params.topic {
        room.put_state(StateEvent::new(
            event_type::TOPIC,
            &params.creator,
            json!({ "topic": topic }),
        ));
    }
    if let Some(ref alias) = params.canonical_alias {
        room.put_state(StateEvent::new(
            event_type::CANONICAL_ALIAS,
            &params.creator,
            json!({ "alias": alias }),
        ));
    }

    let policy = config.rooms.encryption_enabled_by_default;
    if crate::rooms::encrypt_by_default(params.visibility, policy) {
        let content = EncryptionEventContent::with_default_algorithm();
        debug!(
            room = %room_id,
            algorithm = %content.algorithm,
            "Enabling encryption by default"
        );
        room.put_state(StateEvent::new(
            event_type::ENCRYPTION,
            &params.creator,
            json!({ "algorithm": content.algorithm }),
        ));
    }

    debug!(
        room = %room_id,
        creator = %params.creator,
        public = params.visibility.is_public(),
        "Created room"
    );
    store.insert(room);
    room_id
}
