//! Playlist model

use serde::{Deserialize, Serialize};

/// Stable identifier of a track: its position in the collection's track
/// storage. Valid for the lifetime of the [`Collection`] that produced it.
///
/// [`Collection`]: crate::stores::Collection
pub type TrackId = usize;

/// A playlist extracted from the collection's node tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,
    /// Hierarchical path, ancestor names joined by "/" (root excluded)
    pub path: String,
    /// Referenced primary keys, in authored order
    pub track_keys: Vec<String>,
    /// Ids of the keys that resolved against the collection, in key order.
    /// Always at most as long as `track_keys`; keys whose track has left
    /// the library are dropped.
    pub track_ids: Vec<TrackId>,
}

impl Playlist {
    /// Number of authored entries, including unresolved ones
    pub fn entry_count(&self) -> usize {
        self.track_keys.len()
    }

    /// Number of entries that resolved to a track
    pub fn resolved_count(&self) -> usize {
        self.track_ids.len()
    }
}
