//! Filesystem helpers for Traktor's split path representation
//!
//! Traktor stores a file location as three fields: volume, directory and
//! file name. The directory encodes segment separators as the two-character
//! token `/:`. Playlist entries reference tracks by the raw concatenation of
//! the three fields, so both sides of that cross-reference must be built with
//! identical semantics.

use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Traktor's directory separator token
const DIR_SEPARATOR_TOKEN: &str = "/:";

/// Volume names Traktor reports for the macOS system drive
const SYSTEM_VOLUMES: &[&str] = &["Macintosh HD", ":"];

/// Build the primary key a playlist entry uses to reference a track.
///
/// The key is the raw concatenation of volume, directory and file name with
/// no delimiter inserted, exactly as the source format produces it.
pub fn primary_key(volume: &str, dir: &str, file: &str) -> String {
    format!("{volume}{dir}{file}")
}

/// Reconstruct the native absolute path of a track file.
///
/// The directory's `/:` tokens become the platform separator and one leading
/// separator is stripped. A system volume roots the path at `/`, any other
/// named volume under `/Volumes/<volume>`, and an empty volume leaves the
/// path unrooted. Never fails; empty components are skipped best-effort.
pub fn build_file_path(volume: &str, dir: &str, file: &str) -> PathBuf {
    let dir = dir.replace(DIR_SEPARATOR_TOKEN, MAIN_SEPARATOR_STR);
    let dir = dir.strip_prefix(MAIN_SEPARATOR).unwrap_or(&dir);

    let mut path = if volume.is_empty() {
        PathBuf::new()
    } else if SYSTEM_VOLUMES.contains(&volume) {
        PathBuf::from(MAIN_SEPARATOR_STR)
    } else {
        Path::new(MAIN_SEPARATOR_STR).join("Volumes").join(volume)
    };

    if !dir.is_empty() {
        path.push(dir);
    }
    if !file.is_empty() {
        path.push(file);
    }
    path
}
