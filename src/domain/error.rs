use thiserror::Error;

use crate::domain::{ConfigError, DependencyFetchError};

/// Library-wide error type for depviz operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dependency lookup against the registry or the local file failed.
    #[error("Dependency resolution error: {0}")]
    Resolution(#[from] DependencyFetchError),

    /// The registry HTTP client could not be set up.
    #[error("{0}")]
    RegistryClient(String),

    /// Logging could not be initialised.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl AppError {
    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 1,
            AppError::Resolution(_) => 2,
            AppError::RegistryClient(_) | AppError::Logging(_) => 3,
        }
    }
}
