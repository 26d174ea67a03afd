use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while resolving the direct dependencies of a package.
#[derive(Debug, Error)]
pub enum DependencyFetchError {
    #[error("package '{package}' does not exist in the registry")]
    PackageNotFound { package: String },

    #[error("registry request to {url} failed with HTTP status {status}")]
    Http { status: u16, url: String },

    #[error("network error while contacting the registry: {reason}")]
    Network { reason: String },

    #[error("failed to decode registry response: {reason}")]
    Decode { reason: String },

    #[error("test repository file '{}' not found", path.display())]
    LocalFileMissing { path: PathBuf },

    #[error("cannot read test repository file '{}': {source}", path.display())]
    LocalFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("package '{package}' not found in local file '{}'", path.display())]
    NotInLocalFile { package: String, path: PathBuf },
}
