//! File system abstraction
//!
//! The generator only needs a small capability set: existence checks and
//! whole-file writes. `LocalFs` is the production implementation;
//! `MockFileSystem` backs unit tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DockgenResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Write file content, creating parent directories as needed
    fn write(&self, path: &Path, content: &str) -> DockgenResult<()>;

    /// Read file content
    fn read_to_string(&self, path: &Path) -> DockgenResult<String>;
}

/// Local disk implementation.
///
/// Writes go through a tempfile in the destination directory followed by a
/// rename, so a file is either absent or complete.
#[derive(Debug, Clone, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, content: &str) -> DockgenResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DockgenResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn write(&self, path: &Path, content: &str) -> DockgenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DockgenResult<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            crate::error::DockgenError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_local_fs_write_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");

        LocalFs::new().write(&path, "content").unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_local_fs_exists() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let path = dir.path().join("file.txt");

        assert!(!fs.exists(&path));
        fs.write(&path, "x").unwrap();
        assert!(fs.exists(&path));
    }

    #[test]
    fn test_mock_fs_roundtrip() {
        let fs = MockFileSystem::new();
        let path = Path::new("/project/Dockerfile");

        assert!(!fs.exists(path));
        fs.write(path, "FROM node").unwrap();
        assert!(fs.exists(path));
        assert_eq!(fs.read_to_string(path).unwrap(), "FROM node");
    }
}
