//! Raw NML document model
//!
//! Mirrors the on-disk schema of `collection.nml`: a flat list of track
//! entries plus a recursive playlist node tree, everything attribute-bearing.
//! Unknown attributes and elements are ignored and missing ones default to
//! the zero value of their type. This representation is ephemeral; the
//! parser converts it into the canonical models and drops it.

use std::io::BufRead;

use serde::Deserialize;

/// Decode an NML document from a byte stream
pub fn decode<R: BufRead>(reader: R) -> Result<Nml, quick_xml::DeError> {
    quick_xml::de::from_reader(reader)
}

/// Root element of a collection.nml file
#[derive(Debug, Default, Deserialize)]
pub struct Nml {
    #[serde(rename = "@VERSION", default)]
    pub version: String,
    #[serde(rename = "COLLECTION", default)]
    pub collection: CollectionElem,
    #[serde(rename = "PLAYLISTS", default)]
    pub playlists: PlaylistsElem,
}

/// All tracks in the library
#[derive(Debug, Default, Deserialize)]
pub struct CollectionElem {
    #[serde(rename = "@ENTRIES", default)]
    pub entries: u32,
    #[serde(rename = "ENTRY", default)]
    pub tracks: Vec<EntryElem>,
}

/// A single track entry
#[derive(Debug, Default, Deserialize)]
pub struct EntryElem {
    #[serde(rename = "@ARTIST", default)]
    pub artist: String,
    #[serde(rename = "@TITLE", default)]
    pub title: String,
    #[serde(rename = "@AUDIO_ID", default)]
    pub audio_id: String,
    #[serde(rename = "@MODIFIED_DATE", default)]
    pub modified_date: String,
    #[serde(rename = "@MODIFIED_TIME", default)]
    pub modified_time: String,
    #[serde(rename = "LOCATION", default)]
    pub location: LocationElem,
    #[serde(rename = "ALBUM", default)]
    pub album: AlbumElem,
    #[serde(rename = "INFO", default)]
    pub info: InfoElem,
    #[serde(rename = "TEMPO", default)]
    pub tempo: TempoElem,
    #[serde(rename = "LOUDNESS", default)]
    pub loudness: LoudnessElem,
    #[serde(rename = "MUSICAL_KEY", default)]
    pub musical_key: MusicalKeyElem,
    #[serde(rename = "CUE_V2", default)]
    pub cue_points: Vec<CueElem>,
}

/// Split volume/directory/file location of a track
#[derive(Debug, Default, Deserialize)]
pub struct LocationElem {
    #[serde(rename = "@DIR", default)]
    pub dir: String,
    #[serde(rename = "@FILE", default)]
    pub file: String,
    #[serde(rename = "@VOLUME", default)]
    pub volume: String,
    #[serde(rename = "@VOLUMEID", default)]
    pub volume_id: String,
}

/// Album metadata
#[derive(Debug, Default, Deserialize)]
pub struct AlbumElem {
    #[serde(rename = "@TITLE", default)]
    pub title: String,
    #[serde(rename = "@TRACK", default)]
    pub track: i32,
    #[serde(rename = "@OF_TRACKS", default)]
    pub of_tracks: i32,
}

/// Additional track metadata
#[derive(Debug, Default, Deserialize)]
pub struct InfoElem {
    #[serde(rename = "@BITRATE", default)]
    pub bitrate: i32,
    #[serde(rename = "@GENRE", default)]
    pub genre: String,
    #[serde(rename = "@LABEL", default)]
    pub label: String,
    #[serde(rename = "@COMMENT", default)]
    pub comment: String,
    #[serde(rename = "@COMMENT2", default)]
    pub comment2: String,
    #[serde(rename = "@COVERARTID", default)]
    pub cover_art_id: String,
    #[serde(rename = "@KEY", default)]
    pub key: String,
    #[serde(rename = "@PLAYCOUNT", default)]
    pub play_count: i32,
    #[serde(rename = "@PLAYTIME", default)]
    pub play_time: i32,
    #[serde(rename = "@PLAYTIME_FLOAT", default)]
    pub play_time_float: f64,
    #[serde(rename = "@IMPORT_DATE", default)]
    pub import_date: String,
    #[serde(rename = "@LAST_PLAYED", default)]
    pub last_played: String,
    #[serde(rename = "@RANKING", default)]
    pub ranking: i32,
    #[serde(rename = "@RELEASE_DATE", default)]
    pub release_date: String,
    #[serde(rename = "@REMIXER", default)]
    pub remixer: String,
    #[serde(rename = "@PRODUCER", default)]
    pub producer: String,
    #[serde(rename = "@MIX", default)]
    pub mix: String,
    #[serde(rename = "@FILESIZE", default)]
    pub file_size: i64,
    #[serde(rename = "@FLAGS", default)]
    pub flags: i32,
}

/// Tempo analysis
#[derive(Debug, Default, Deserialize)]
pub struct TempoElem {
    #[serde(rename = "@BPM", default)]
    pub bpm: f64,
    #[serde(rename = "@BPM_QUALITY", default)]
    pub bpm_quality: f64,
}

/// Loudness analysis
#[derive(Debug, Default, Deserialize)]
pub struct LoudnessElem {
    #[serde(rename = "@PEAK_DB", default)]
    pub peak_db: f64,
    #[serde(rename = "@PERCEIVED_DB", default)]
    pub perceived_db: f64,
    #[serde(rename = "@ANALYZED_DB", default)]
    pub analyzed_db: f64,
}

/// Detected musical key
#[derive(Debug, Default, Deserialize)]
pub struct MusicalKeyElem {
    #[serde(rename = "@VALUE", default)]
    pub value: i32,
}

/// A cue point or loop marker
#[derive(Debug, Default, Deserialize)]
pub struct CueElem {
    #[serde(rename = "@NAME", default)]
    pub name: String,
    #[serde(rename = "@TYPE", default)]
    pub cue_type: i32,
    #[serde(rename = "@START", default)]
    pub start: f64,
    #[serde(rename = "@LEN", default)]
    pub len: f64,
    #[serde(rename = "@REPEATS", default)]
    pub repeats: i32,
    #[serde(rename = "@HOTCUE", default)]
    pub hotcue: i32,
}

/// Playlist tree container
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistsElem {
    #[serde(rename = "NODE", default)]
    pub node: NodeElem,
}

/// A folder or playlist in the node tree. Both roles may apply at once:
/// playlist data and subnodes are independent.
#[derive(Debug, Default, Deserialize)]
pub struct NodeElem {
    #[serde(rename = "@TYPE", default)]
    pub node_type: String,
    #[serde(rename = "@NAME", default)]
    pub name: String,
    #[serde(rename = "@COUNT", default)]
    pub count: u32,
    #[serde(rename = "SUBNODES", default)]
    pub subnodes: SubnodesElem,
    #[serde(rename = "PLAYLIST")]
    pub playlist: Option<PlaylistElem>,
}

/// Wrapper element around a node's children
#[derive(Debug, Default, Deserialize)]
pub struct SubnodesElem {
    #[serde(rename = "@COUNT", default)]
    pub count: u32,
    #[serde(rename = "NODE", default)]
    pub nodes: Vec<NodeElem>,
}

/// The track references carried by a playlist node
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistElem {
    #[serde(rename = "@ENTRIES", default)]
    pub entries: u32,
    #[serde(rename = "@TYPE", default)]
    pub playlist_type: String,
    #[serde(rename = "@UUID", default)]
    pub uuid: String,
    #[serde(rename = "ENTRY", default)]
    pub items: Vec<PlaylistEntryElem>,
}

/// One playlist item referencing a track
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistEntryElem {
    #[serde(rename = "PRIMARYKEY", default)]
    pub primary_key: PrimaryKeyElem,
}

/// The reference key of a playlist item
#[derive(Debug, Default, Deserialize)]
pub struct PrimaryKeyElem {
    #[serde(rename = "@TYPE", default)]
    pub key_type: String,
    #[serde(rename = "@KEY", default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_document() {
        let xml = r#"<NML VERSION="20">
            <HEAD COMPANY="www.native-instruments.com" PROGRAM="Traktor"></HEAD>
            <COLLECTION ENTRIES="1">
                <ENTRY ARTIST="A" TITLE="T">
                    <LOCATION DIR="/:Music/:" FILE="t.mp3" VOLUME="HD"></LOCATION>
                    <TEMPO BPM="128.0"></TEMPO>
                </ENTRY>
            </COLLECTION>
            <PLAYLISTS>
                <NODE TYPE="FOLDER" NAME="$ROOT"></NODE>
            </PLAYLISTS>
        </NML>"#;

        let nml: Nml = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(nml.version, "20");
        assert_eq!(nml.collection.entries, 1);
        assert_eq!(nml.collection.tracks.len(), 1);

        let entry = &nml.collection.tracks[0];
        assert_eq!(entry.artist, "A");
        assert_eq!(entry.location.file, "t.mp3");
        assert_eq!(entry.tempo.bpm, 128.0);
        assert_eq!(nml.playlists.node.name, "$ROOT");
        assert!(nml.playlists.node.playlist.is_none());
    }

    #[test]
    fn test_missing_and_unknown_attributes_default() {
        // INFO is absent entirely, ENTRY carries an attribute we don't model
        let xml = r#"<NML VERSION="19">
            <COLLECTION ENTRIES="1">
                <ENTRY TITLE="T" LOCK="1" LOCK_MODIFICATION_TIME="x">
                    <LOCATION FILE="t.mp3"></LOCATION>
                </ENTRY>
            </COLLECTION>
        </NML>"#;

        let nml: Nml = quick_xml::de::from_str(xml).unwrap();
        let entry = &nml.collection.tracks[0];
        assert_eq!(entry.artist, "");
        assert_eq!(entry.info.bitrate, 0);
        assert_eq!(entry.info.play_time_float, 0.0);
        assert_eq!(entry.location.volume, "");
        assert!(entry.cue_points.is_empty());
    }

    #[test]
    fn test_nested_nodes_decode_recursively() {
        let xml = r#"<NML VERSION="20">
            <PLAYLISTS>
                <NODE TYPE="FOLDER" NAME="$ROOT">
                    <SUBNODES COUNT="1">
                        <NODE TYPE="PLAYLIST" NAME="Warmup">
                            <PLAYLIST ENTRIES="1" TYPE="LIST" UUID="abc">
                                <ENTRY>
                                    <PRIMARYKEY TYPE="TRACK" KEY="HD/:Music/:t.mp3"></PRIMARYKEY>
                                </ENTRY>
                            </PLAYLIST>
                        </NODE>
                    </SUBNODES>
                </NODE>
            </PLAYLISTS>
        </NML>"#;

        let nml: Nml = quick_xml::de::from_str(xml).unwrap();
        let root = &nml.playlists.node;
        assert_eq!(root.subnodes.nodes.len(), 1);

        let warmup = &root.subnodes.nodes[0];
        let data = warmup.playlist.as_ref().unwrap();
        assert_eq!(data.uuid, "abc");
        assert_eq!(data.items[0].primary_key.key, "HD/:Music/:t.mp3");
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let result: Result<Nml, _> = quick_xml::de::from_str("<NML><COLLECTION>");
        assert!(result.is_err());
    }
}
