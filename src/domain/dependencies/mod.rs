pub mod error;
pub mod local_registry;
pub mod metadata;
pub mod result;

pub use error::DependencyFetchError;
pub use metadata::{PackageInfo, PackageMetadata, requirement_name};
pub use result::{DependencyResult, Provenance};
