//! Test double for `LocalFilesystem`.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::LocalFilesystem;

/// In-memory implementation of `LocalFilesystem` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MockFilesystem {
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// A file that exists but fails to read, as with missing permissions.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }
}

impl LocalFilesystem for MockFilesystem {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.contains(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Mock permission denied"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
    }
}
