//! Filesystem access used for configuration and substitute-registry files.

use std::io;
use std::path::Path;

/// Port for the handful of filesystem reads the application performs.
pub trait LocalFilesystem {
    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}
