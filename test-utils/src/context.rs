use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Test environment owning an isolated temporary directory tree.
///
/// Provides `data` and `temp` subdirectory paths mirroring the application's
/// deployment layout. The paths are not created eagerly: stores and services
/// create their directories lazily, and tests exercise exactly that behavior.
/// The whole tree is removed when the context is dropped.
pub struct TestContext {
    /// Root temporary directory; removed on drop.
    root: TempDir,
}

impl TestContext {
    /// Creates a new test context with a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an isolated directory tree
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    /// Root path of the isolated directory tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path for persisted configuration, mirroring the deployment `data/`
    /// directory. Not created until a store writes to it.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Path for transient generated files, mirroring the deployment `temp/`
    /// directory. Not created until a service writes to it.
    pub fn temp_dir(&self) -> PathBuf {
        self.root.path().join("temp")
    }
}
