//! Directory search filtering.

use serde::Deserialize;
use tracing::debug;

use super::entry::RoomDirectoryEntry;
use crate::state::RoomStateStore;

/// Caller-supplied search criteria for a directory listing request.
///
/// Request-scoped and immutable. An absent term means "match everything".
/// Additional filter dimensions (e.g. room type) would be logically ANDed
/// with the generic-term check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
    pub generic_search_term: Option<String>,
}

impl SearchFilter {
    /// A filter with the given free-text term.
    pub fn with_term(term: &str) -> Self {
        Self {
            generic_search_term: Some(term.to_string()),
        }
    }

    /// Whether a directory entry satisfies this filter.
    ///
    /// With no term (or an empty one) every entry matches. Otherwise the
    /// term must occur as a substring of the entry's name, topic, or
    /// canonical alias, compared after Unicode case folding. Absent fields
    /// never match. Whitespace and diacritics are not normalized.
    pub fn matches(&self, entry: &RoomDirectoryEntry) -> bool {
        let Some(term) = self.generic_search_term.as_deref() else {
            return true;
        };
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        [
            entry.name.as_deref(),
            entry.topic.as_deref(),
            entry.canonical_alias.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// List the public directory, keeping only entries the filter matches.
///
/// Invite-only rooms are never listed. Ordering and pagination are the
/// caller's responsibility.
pub async fn search_public_rooms(
    store: &RoomStateStore,
    filter: &SearchFilter,
) -> Vec<RoomDirectoryEntry> {
    let mut results = Vec::new();

    for handle in store.rooms() {
        let room = handle.read().await;
        if !room.is_published() {
            continue;
        }

        let entry = RoomDirectoryEntry::from_room(&room);
        if filter.matches(&entry) {
            results.push(entry);
        }
    }

    debug!(
        term = filter.generic_search_term.as_deref().unwrap_or(""),
        matched = results.len(),
        "Searched public room directory"
    );
    results
}
