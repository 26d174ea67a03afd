pub mod configuration;
pub mod dependencies;
pub mod error;

pub use configuration::{ConfigError, ConfigWarning, Configuration, SourceMode};
pub use dependencies::{
    DependencyFetchError, DependencyResult, PackageInfo, PackageMetadata, Provenance,
};
pub use error::AppError;
