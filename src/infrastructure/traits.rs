//! I/O boundary traits for testability
//!
//! Project detection only ever asks whether a path exists, so the
//! filesystem abstraction stays read-only.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem abstraction.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Current working directory of the process.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
