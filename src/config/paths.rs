//! Discovery of the Traktor collection file
//!
//! Traktor keeps one `collection.nml` per product version under the user's
//! Documents folder. Discovery tries the known version folders in order and
//! takes the first one whose collection file exists.

use std::path::{Path, PathBuf};

/// Known Traktor install folders, newest first
const TRAKTOR_VERSIONS: &[&str] = &["Traktor 4.4.1", "Traktor 4.4.0"];

/// Vendor folder under Documents
const VENDOR_DIR: &str = "Native Instruments";

/// Collection file name
const COLLECTION_FILE: &str = "collection.nml";

/// Check whether a Traktor installation with a collection file exists
pub fn is_available() -> bool {
    collection_location().is_some()
}

/// Locate the collection file, trying known product versions in order.
/// Returns `None` when no candidate exists.
pub fn collection_location() -> Option<PathBuf> {
    let documents = documents_dir()?;
    TRAKTOR_VERSIONS
        .iter()
        .map(|version| documents.join(VENDOR_DIR).join(version).join(COLLECTION_FILE))
        .find(|path| path.is_file())
}

/// The user's Documents folder, falling back to `~/Documents` when the
/// platform does not report one
fn documents_dir() -> Option<PathBuf> {
    let user_dirs = directories::UserDirs::new()?;
    Some(
        user_dirs
            .document_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| user_dirs.home_dir().join("Documents")),
    )
}
