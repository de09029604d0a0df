//! Service container for dependency injection
//!
//! Wires the filesystem and the working directory used for project detection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::infrastructure::detect;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding everything a command handler needs besides output.
pub struct ServiceContainer {
    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Directory checked for marker files
    pub work_dir: PathBuf,
}

impl ServiceContainer {
    /// Create a new service container with real implementations,
    /// rooted at the process working directory.
    pub fn new() -> InfraResult<Self> {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let work_dir = fs
            .current_dir()
            .map_err(|e| InfraError::io("resolve working directory", e))?;
        Ok(Self::with_deps(fs, work_dir))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(fs: Arc<dyn FileSystem>, work_dir: PathBuf) -> Self {
        Self { fs, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Whether the working directory holds a marker file.
    pub fn in_function_project(&self) -> bool {
        detect::is_function_project(self.fs.as_ref(), &self.work_dir)
    }
}
