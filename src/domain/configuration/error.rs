use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a configuration document can be rejected.
///
/// Every variant names the offending file or field so the fix is unambiguous.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read configuration file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration document: {reason}")]
    Malformed { reason: String },

    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("field 'test_mode' must be 'true' or 'false', got '{value}'")]
    InvalidTestMode { value: String },

    #[error("field 'repository_url' must start with http:// or https://, got '{url}'")]
    InvalidRepositoryUrl { url: String },
}

impl ConfigError {
    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        ConfigError::Malformed { reason: reason.into() }
    }
}
