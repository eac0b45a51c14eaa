//! Error types for collection loading

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors produced while locating, reading, or decoding a collection file.
///
/// The error is `Clone` so a failed parse can live in the lazy loader's
/// cache; non-clonable sources are Arc-wrapped.
#[derive(Debug, Clone, Error)]
pub enum CollectionError {
    /// No collection file exists at any known Traktor install location.
    #[error("no Traktor collection file found")]
    NotFound,

    /// The collection file could not be opened or read.
    #[error("failed to read collection file")]
    Io(#[source] Arc<io::Error>),

    /// The collection file is not well-formed or does not match the schema.
    #[error("failed to decode collection file")]
    Decode(#[source] Arc<quick_xml::DeError>),
}

impl From<io::Error> for CollectionError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<quick_xml::DeError> for CollectionError {
    fn from(err: quick_xml::DeError) -> Self {
        Self::Decode(Arc::new(err))
    }
}
