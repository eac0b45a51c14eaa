//! Lazily loaded, process-wide collection cache

use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::core::parse_collection;
use crate::error::CollectionError;
use crate::models::Playlist;
use crate::stores::Collection;

/// Global collection store instance
static COLLECTION_STORE: CollectionStore = CollectionStore::new();

/// A load-on-first-use cache for a parsed [`Collection`].
///
/// The first call to [`get`] parses the collection exactly once; concurrent
/// first callers block until that parse finishes and all observe the same
/// outcome. The outcome is cached either way, so a failed parse is not
/// retried for the lifetime of the store. Callers who want retry semantics
/// construct a fresh store.
///
/// [`get`]: CollectionStore::get
pub struct CollectionStore {
    cell: OnceLock<Result<Arc<Collection>, CollectionError>>,
}

impl CollectionStore {
    /// Create an empty store; nothing is parsed until first access
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Get the process-wide store
    pub fn global() -> &'static CollectionStore {
        &COLLECTION_STORE
    }

    /// Get the cached collection, discovering and parsing it on first use
    pub fn get(&self) -> Result<Arc<Collection>, CollectionError> {
        self.load_with(parse_collection)
    }

    /// Like [`get`](Self::get), but with a caller-supplied load function.
    /// The function runs at most once per store, no matter how many callers
    /// race on first access.
    pub fn load_with<F>(&self, load: F) -> Result<Arc<Collection>, CollectionError>
    where
        F: FnOnce() -> Result<Collection, CollectionError>,
    {
        self.cell.get_or_init(|| load().map(Arc::new)).clone()
    }

    /// Whether a load outcome (success or failure) is already cached
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// All playlists in traversal order. Empty when the collection is not
/// available.
pub fn get_playlists() -> Vec<Playlist> {
    match CollectionStore::global().get() {
        Ok(collection) => collection.playlists().to_vec(),
        Err(err) => {
            warn!("collection unavailable: {err}");
            Vec::new()
        }
    }
}

/// All playlist names, sorted
pub fn get_sorted_playlist_names() -> Vec<String> {
    match CollectionStore::global().get() {
        Ok(collection) => collection.sorted_playlist_names(),
        Err(err) => {
            warn!("collection unavailable: {err}");
            Vec::new()
        }
    }
}

/// Fetch a playlist by name (first exact match)
pub fn get_playlist_by_name(name: &str) -> Option<Playlist> {
    match CollectionStore::global().get() {
        Ok(collection) => collection.playlist_by_name(name).cloned(),
        Err(err) => {
            warn!("collection unavailable: {err}");
            None
        }
    }
}

/// Eagerly load the collection and report how many playlists it holds
pub fn load_collection() -> Result<usize, CollectionError> {
    let collection = CollectionStore::global().get()?;
    let count = collection.playlists().len();
    info!("Traktor collection loaded, {count} playlists");
    Ok(count)
}
