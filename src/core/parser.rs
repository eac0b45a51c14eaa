//! Collection parsing pipeline
//!
//! Reads the whole document, normalizes entries into [`Track`] records,
//! extracts the playlist tree, and assembles the immutable [`Collection`].
//! Parsing is all-or-nothing: a decode failure yields no partial index.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::config::paths::collection_location;
use crate::core::schema::{self, EntryElem, NodeElem};
use crate::error::CollectionError;
use crate::models::{CuePoint, Playlist, Track};
use crate::stores::Collection;
use crate::utils::filesystem::{build_file_path, primary_key};

/// Name of the synthetic root node of the playlist tree
const ROOT_NODE_NAME: &str = "$ROOT";

/// Parse the collection from its auto-discovered location.
///
/// Returns [`CollectionError::NotFound`] when no known install directory
/// holds a collection file.
pub fn parse_collection() -> Result<Collection, CollectionError> {
    let location = collection_location().ok_or(CollectionError::NotFound)?;
    parse_collection_from_path(&location)
}

/// Parse a collection file at an explicit path
pub fn parse_collection_from_path(path: &Path) -> Result<Collection, CollectionError> {
    info!("parsing Traktor collection from {}", path.display());

    let file = File::open(path)?;
    let nml = schema::decode(BufReader::new(file))?;

    let tracks: Vec<Track> = nml
        .collection
        .tracks
        .into_iter()
        .map(normalize_entry)
        .collect();
    let mut collection = Collection::from_tracks(nml.version, tracks);

    let mut playlists = Vec::new();
    extract_playlists(&nml.playlists.node, "", &collection, &mut playlists);

    info!(
        "collection loaded: {} tracks, {} playlists",
        collection.tracks().len(),
        playlists.len()
    );
    collection.attach_playlists(playlists);
    Ok(collection)
}

/// Convert a raw entry into a canonical track, computing its primary key
/// and native file path from the split location fields
fn normalize_entry(entry: EntryElem) -> Track {
    let loc = &entry.location;
    let file_path = build_file_path(&loc.volume, &loc.dir, &loc.file);
    let key = primary_key(&loc.volume, &loc.dir, &loc.file);

    Track {
        artist: entry.artist,
        title: entry.title,
        album: entry.album.title,
        genre: entry.info.genre,
        label: entry.info.label,
        comment: entry.info.comment,
        remixer: entry.info.remixer,
        producer: entry.info.producer,
        bpm: entry.tempo.bpm,
        key: entry.info.key,
        musical_key: entry.musical_key.value,
        rating: entry.info.ranking,
        play_count: entry.info.play_count,
        duration: entry.info.play_time_float,
        bitrate: entry.info.bitrate,
        file_size: entry.info.file_size,
        file_path,
        primary_key: key,
        file_name: entry.location.file,
        volume: entry.location.volume,
        import_date: entry.info.import_date,
        last_played: entry.info.last_played,
        release_date: entry.info.release_date,
        peak_db: entry.loudness.peak_db,
        perceived_db: entry.loudness.perceived_db,
        cue_points: entry
            .cue_points
            .into_iter()
            .map(|cue| CuePoint {
                name: cue.name,
                cue_type: cue.cue_type,
                start: cue.start,
                len: cue.len,
                repeats: cue.repeats,
                hotcue: cue.hotcue,
            })
            .collect(),
    }
}

/// Walk the node tree depth-first in document order, extracting playlists.
///
/// The root node contributes no path segment. A node carrying playlist data
/// is extracted and its subnodes are still descended into; the two roles are
/// independent.
fn extract_playlists(
    node: &NodeElem,
    parent_path: &str,
    collection: &Collection,
    out: &mut Vec<Playlist>,
) {
    let path = node_path(&node.name, parent_path);

    if let Some(data) = &node.playlist {
        let mut playlist = Playlist {
            name: node.name.clone(),
            path: path.clone(),
            track_keys: Vec::with_capacity(data.items.len()),
            track_ids: Vec::with_capacity(data.items.len()),
        };

        for item in &data.items {
            let key = &item.primary_key.key;
            playlist.track_keys.push(key.clone());
            match collection.id_by_key(key) {
                Some(id) => playlist.track_ids.push(id),
                // the audio may have been removed from the library without
                // the playlist being re-saved; keep the authored key only
                None => debug!(playlist = %playlist.name, %key, "unresolved playlist entry"),
            }
        }

        out.push(playlist);
    }

    for subnode in &node.subnodes.nodes {
        extract_playlists(subnode, &path, collection, out);
    }
}

/// Hierarchical path of a node: its parent's path plus "/" plus its name.
/// The root node (empty name or "$ROOT") contributes nothing.
fn node_path(name: &str, parent: &str) -> String {
    if name.is_empty() || name == ROOT_NODE_NAME {
        parent.to_string()
    } else if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
