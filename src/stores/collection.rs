//! Collection index - immutable in-memory index over tracks and playlists

use std::collections::HashMap;

use tracing::warn;

use crate::models::{Playlist, Track, TrackId};

/// The parsed collection: all tracks, all playlists, and a key lookup map.
///
/// Built once per parse and immutable afterward. Track storage never moves
/// after construction, so a [`TrackId`] stays valid for the lifetime of the
/// collection. A new parse produces a whole new `Collection`; there is no
/// incremental update.
#[derive(Debug)]
pub struct Collection {
    version: String,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    by_key: HashMap<String, TrackId>,
}

impl Collection {
    /// Build the index over normalized tracks. Playlists are attached by the
    /// parser once extracted, since extraction resolves keys through this
    /// index.
    pub(crate) fn from_tracks(version: String, tracks: Vec<Track>) -> Self {
        let mut by_key = HashMap::with_capacity(tracks.len());
        for (id, track) in tracks.iter().enumerate() {
            if let Some(previous) = by_key.insert(track.primary_key.clone(), id) {
                // the source format does not specify this case; the later
                // entry wins in the lookup map
                warn!(
                    key = %track.primary_key,
                    previous, later = id,
                    "duplicate primary key in collection"
                );
            }
        }
        Self {
            version,
            tracks,
            playlists: Vec::new(),
            by_key,
        }
    }

    pub(crate) fn attach_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    pub(crate) fn id_by_key(&self, key: &str) -> Option<TrackId> {
        self.by_key.get(key).copied()
    }

    /// Version string of the source document
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All tracks, in source document order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// All playlists, in pre-order tree traversal order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Get a track by its stable id
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Get a track by its primary key
    pub fn track_by_key(&self, key: &str) -> Option<&Track> {
        self.id_by_key(key).and_then(|id| self.tracks.get(id))
    }

    /// Find the first playlist with the given name (exact, case-sensitive).
    /// Duplicate names resolve to the first occurrence in traversal order.
    pub fn playlist_by_name(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Find the first playlist with the given hierarchical path
    /// (exact, case-sensitive)
    pub fn playlist_by_path(&self, path: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.path == path)
    }

    /// Resolve a playlist's track ids to track references, skipping any id
    /// that does not exist
    pub fn playlist_tracks(&self, playlist: &Playlist) -> Vec<&Track> {
        playlist
            .track_ids
            .iter()
            .filter_map(|&id| self.tracks.get(id))
            .collect()
    }

    /// All tracks whose artist, title or album contains the query as a
    /// case-insensitive substring, in source order
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let query = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| {
                t.artist.to_lowercase().contains(&query)
                    || t.title.to_lowercase().contains(&query)
                    || t.album.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All tracks with BPM in the inclusive range [min, max]
    pub fn tracks_by_bpm_range(&self, min: f64, max: f64) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.bpm >= min && t.bpm <= max)
            .collect()
    }

    /// All tracks whose key string matches case-insensitively
    /// (exact match, not substring)
    pub fn tracks_by_key(&self, key: &str) -> Vec<&Track> {
        let key = key.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.key.to_lowercase() == key)
            .collect()
    }

    /// All playlist names, sorted
    pub fn sorted_playlist_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.playlists.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }
}
