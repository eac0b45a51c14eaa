//! Read-only access to a Traktor DJ collection
//!
//! Parses Traktor's `collection.nml` catalog into an immutable in-memory
//! index of tracks and nested playlists, and answers lookup, search and
//! filter queries against it.
//!
//! The usual entry points:
//!
//! - [`parse_collection_from_path`] for an explicit file,
//! - [`parse_collection`] to auto-discover the file under the user's
//!   Documents folder,
//! - [`CollectionStore`] for a parse-once cache shared across callers.
//!
//! ```no_run
//! use traktor_collection::parse_collection_from_path;
//!
//! let collection = parse_collection_from_path("collection.nml".as_ref())?;
//! for track in collection.search("strobe") {
//!     println!("{} - {}", track.artist, track.title);
//! }
//! # Ok::<(), traktor_collection::CollectionError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod stores;
pub mod utils;

pub use config::{collection_location, is_available};
pub use core::{parse_collection, parse_collection_from_path};
pub use error::CollectionError;
pub use models::{CuePoint, Playlist, Track, TrackId};
pub use stores::collection_store::{
    get_playlist_by_name, get_playlists, get_sorted_playlist_names, load_collection,
};
pub use stores::{Collection, CollectionStore};
