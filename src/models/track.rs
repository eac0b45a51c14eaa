//! Track and cue point models

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A timestamped marker within a track's audio: cue, loop, grid or fade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuePoint {
    /// Marker name
    pub name: String,
    /// Raw Traktor type code
    pub cue_type: i32,
    /// Start position in milliseconds
    pub start: f64,
    /// Length in milliseconds (loops only)
    pub len: f64,
    /// Repeat count
    pub repeats: i32,
    /// Hot-cue slot, -1 when not mapped
    pub hotcue: i32,
}

/// A music track in the collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    /// Track artist
    pub artist: String,
    /// Track title
    pub title: String,
    /// Album title
    pub album: String,
    /// Genre
    pub genre: String,
    /// Record label
    pub label: String,
    /// Comment field
    pub comment: String,
    /// Remixer credit
    pub remixer: String,
    /// Producer credit
    pub producer: String,
    /// Analyzed tempo in beats per minute
    pub bpm: f64,
    /// Musical key string, e.g. "8m"
    pub key: String,
    /// Numeric musical key value
    pub musical_key: i32,
    /// Rating (Traktor ranking value)
    pub rating: i32,
    /// Play count
    pub play_count: i32,
    /// Duration in seconds
    pub duration: f64,
    /// Bitrate in bits per second
    pub bitrate: i32,
    /// File size in bytes
    pub file_size: i64,
    /// Absolute path to the audio file
    pub file_path: PathBuf,
    /// File name without directory
    pub file_name: String,
    /// Volume the file lives on
    pub volume: String,
    /// Import date as stored in the collection
    pub import_date: String,
    /// Last played date as stored in the collection
    pub last_played: String,
    /// Release date as stored in the collection
    pub release_date: String,
    /// Analyzed peak loudness in dB
    pub peak_db: f64,
    /// Perceived loudness in dB
    pub perceived_db: f64,
    /// Cue points and loops
    pub cue_points: Vec<CuePoint>,
    /// Key playlists use to reference this track
    pub primary_key: String,
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.primary_key == other.primary_key
    }
}

impl Eq for Track {}

impl std::hash::Hash for Track {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.primary_key.hash(state);
    }
}
