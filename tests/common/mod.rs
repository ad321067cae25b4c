//! Integration test common infrastructure.
//!
//! Provides a minimal in-process server: configuration, room-state store,
//! and room id generation wired together the way the daemon wires them.
#![allow(dead_code)] // not every test binary uses every helper

use std::io::Write;

use hearthd_core::config::{Config, EncryptionDefaultPolicy, RoomsConfig, ServerConfig};
use hearthd_core::rooms::{CreateRoomParams, create_room};
use hearthd_core::state::{RoomId, RoomIdGenerator, RoomStateStore, RoomVisibility};

pub const SERVER_NAME: &str = "hearth.example.com";
pub const CREATOR: &str = "@user:hearth.example.com";

pub struct TestServer {
    pub config: Config,
    pub store: RoomStateStore,
    pub id_gen: RoomIdGenerator,
}

impl TestServer {
    /// A server configured with the given encryption-default policy.
    pub fn with_policy(policy: EncryptionDefaultPolicy) -> Self {
        Self::new(Config {
            server: ServerConfig {
                name: SERVER_NAME.to_string(),
                description: None,
            },
            rooms: RoomsConfig {
                encryption_enabled_by_default: policy,
            },
        })
    }

    /// A server whose configuration is loaded from TOML, exercising the
    /// same path the daemon takes at startup.
    pub fn from_config_toml(content: &str) -> Self {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("write config");
        let config = Config::load(file.path()).expect("config should load");
        hearthd_core::config::validate(&config).expect("config should validate");
        Self::new(config)
    }

    fn new(config: Config) -> Self {
        let id_gen = RoomIdGenerator::new(config.server.name.clone());
        Self {
            config,
            store: RoomStateStore::new(),
            id_gen,
        }
    }

    /// Create a bare room with the given visibility.
    pub async fn create_room(&self, visibility: RoomVisibility) -> RoomId {
        create_room(
            &self.store,
            &self.id_gen,
            &self.config,
            CreateRoomParams::new(CREATOR, visibility),
        )
        .await
    }

    /// Create a room with directory-visible attributes.
    pub async fn create_room_with_attrs(
        &self,
        visibility: RoomVisibility,
        name: Option<&str>,
        topic: Option<&str>,
        canonical_alias: Option<&str>,
    ) -> RoomId {
        let params = CreateRoomParams {
            creator: CREATOR.to_string(),
            visibility,
            name: name.map(str::to_string),
            topic: topic.map(str::to_string),
            canonical_alias: canonical_alias.map(str::to_string),
        };
        create_room(&self.store, &self.id_gen, &self.config, params).await
    }
}
