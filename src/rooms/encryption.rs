//! Encryption-default policy resolution.

use crate::config::EncryptionDefaultPolicy;
use crate::state::RoomVisibility;

/// Decide whether a newly created room gets encryption enabled by default.
///
/// Pure function of the room's visibility class and the server-wide policy:
///
/// | policy       | invite-only | public |
/// |--------------|-------------|--------|
/// | `all`        | yes         | yes    |
/// | `invite`     | yes         | no     |
/// | `off`        | no          | no     |
///
/// When this returns true, room creation emits an `m.room.encryption`
/// state event carrying the default algorithm; when false, no event is
/// written and a lookup for that type must report "not found".
pub fn encrypt_by_default(visibility: RoomVisibility, policy: EncryptionDefaultPolicy) -> bool {
    match policy {
        EncryptionDefaultPolicy::All => true,
        EncryptionDefaultPolicy::InviteOnly => visibility == RoomVisibility::InviteOnly,
        EncryptionDefaultPolicy::Off => false,
    }
}
