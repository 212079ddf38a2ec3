//! In-memory file system for use case tests.

#![allow(clippy::unwrap_used, missing_docs)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{FileSystem, FileSystemError};

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<HashSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates a file system holding one file, with its ancestors as directories.
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        let fs = Self::default();
        if let Some(parent) = path.parent() {
            fs.add_dirs(parent);
        }
        fs.files.lock().unwrap().insert(path, contents.into());
        fs
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for dir in path.ancestors() {
            dirs.insert(dir.to_path_buf());
        }
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        let bytes = self
            .files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes).map_err(|_| FileSystemError::InvalidUtf8(path.to_path_buf()))
    }

    /// Fails like `fs::write` when the parent directory is missing.
    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && !self.has_dir(parent)
        {
            return Err(FileSystemError::NotFound(parent.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        self.add_dirs(path);
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }
}
