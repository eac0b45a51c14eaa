//! Data models for the Traktor collection
//!
//! This module contains the canonical data structures the rest of the crate
//! works with, produced once per parse and immutable afterward.

mod playlist;
mod track;

pub use playlist::{Playlist, TrackId};
pub use track::{CuePoint, Track};
