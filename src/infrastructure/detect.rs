//! Function project detection against a `FileSystem`

use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::MARKER_FILES;
use crate::infrastructure::traits::FileSystem;

/// First marker file present in `dir`, in `MARKER_FILES` order.
pub fn find_marker(fs: &dyn FileSystem, dir: &Path) -> Option<&'static str> {
    MARKER_FILES
        .into_iter()
        .find(|marker| fs.exists(&dir.join(marker)))
}

/// Whether `dir` looks like a function project.
#[instrument(skip(fs))]
pub fn is_function_project(fs: &dyn FileSystem, dir: &Path) -> bool {
    match find_marker(fs, dir) {
        Some(marker) => {
            debug!("found marker file: {}", marker);
            true
        }
        None => {
            debug!("no marker file in {}", dir.display());
            false
        }
    }
}
