use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::ports::LocalFilesystem;

/// `LocalFilesystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl LocalFilesystem for StdFilesystem {
    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        debug!(path = %path.display(), "Reading file");
        fs::read_to_string(path)
    }
}
