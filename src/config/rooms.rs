//! Room policy configuration.

use serde::Deserialize;

/// Room policy configuration (`[rooms]` section).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomsConfig {
    /// Which newly created rooms get encryption enabled by default.
    /// Recognized values: "all", "invite", "off" (default).
    #[serde(default)]
    pub encryption_enabled_by_default: EncryptionDefaultPolicy,
}

/// Server-wide default-encryption policy, loaded once at startup and
/// immutable for the process lifetime.
///
/// A closed enumeration rather than a raw config string, so new policy
/// values cannot fall through the decision table silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionDefaultPolicy {
    /// Encrypt every new room.
    All,
    /// Encrypt only invite-only rooms.
    #[serde(rename = "invite")]
    InviteOnly,
    /// Never auto-encrypt.
    #[default]
    Off,
}
