//! Test utilities for building temporary directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated with fixture files.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A pattern string rooted in the fixture; `""` names the directory itself.
    pub fn pattern(&self, rel: &str) -> String {
        if rel.is_empty() {
            self.dir.path().to_string_lossy().to_string()
        } else {
            self.dir.path().join(rel).to_string_lossy().to_string()
        }
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `link` pointing to `target` (which may not exist).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let full_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Set the permission bits of an existing path.
    #[cfg(unix)]
    pub fn set_mode(&self, path: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(self.dir.path().join(path), fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
