//! Package registry port definition.

use crate::domain::{DependencyFetchError, PackageMetadata};

/// Port for reading per-package metadata from a package registry.
///
/// Implementations perform exactly one request per call and never retry.
pub trait PackageRegistry {
    /// Fetch the metadata document for `package`.
    fn fetch_metadata(&self, package: &str) -> Result<PackageMetadata, DependencyFetchError>;
}
