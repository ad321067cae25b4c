//! Public room directory: entries, search filtering, and listing.

mod entry;
mod search;

pub use entry::RoomDirectoryEntry;
pub use search::{SearchFilter, search_public_rooms};
