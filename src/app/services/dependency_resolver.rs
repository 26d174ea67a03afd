//! Dependency resolver service.

use std::path::Path;

use tracing::debug;

use crate::domain::dependencies::local_registry;
use crate::domain::{
    Configuration, DependencyFetchError, DependencyResult, Provenance, SourceMode,
};
use crate::ports::{LocalFilesystem, PackageRegistry};

/// Resolves the direct dependencies of the configured package.
///
/// Each call performs exactly one read, either a registry request or a file
/// read, and returns a fresh result.
pub struct DependencyResolver<R: PackageRegistry, F: LocalFilesystem> {
    registry: R,
    filesystem: F,
}

impl<R: PackageRegistry, F: LocalFilesystem> DependencyResolver<R, F> {
    pub fn new(registry: R, filesystem: F) -> Self {
        Self { registry, filesystem }
    }

    /// Resolve dependencies from the source selected by the configuration.
    pub fn resolve(&self, config: &Configuration) -> Result<DependencyResult, DependencyFetchError> {
        match config.source() {
            SourceMode::Registry { .. } => self.resolve_from_registry(config.package_name()),
            SourceMode::LocalFile { path } => self.resolve_from_file(config.package_name(), path),
        }
    }

    /// Registry names are deduplicated and returned sorted.
    fn resolve_from_registry(&self, package: &str) -> Result<DependencyResult, DependencyFetchError> {
        let metadata = self.registry.fetch_metadata(package)?;
        let names: Vec<String> = metadata.dependency_names().into_iter().collect();
        debug!(package, count = names.len(), "Resolved dependencies from registry");

        Ok(DependencyResult::new(package, names, Provenance::Registry))
    }

    /// File entries keep their order and duplicates.
    fn resolve_from_file(
        &self,
        package: &str,
        path: &Path,
    ) -> Result<DependencyResult, DependencyFetchError> {
        if !self.filesystem.file_exists(path) {
            return Err(DependencyFetchError::LocalFileMissing { path: path.to_path_buf() });
        }

        let content = self
            .filesystem
            .read_file(path)
            .map_err(|source| DependencyFetchError::LocalFileRead { path: path.to_path_buf(), source })?;

        let names = local_registry::find_dependencies(&content, package).ok_or_else(|| {
            DependencyFetchError::NotInLocalFile {
                package: package.to_string(),
                path: path.to_path_buf(),
            }
        })?;
        debug!(package, count = names.len(), "Resolved dependencies from local file");

        Ok(DependencyResult::new(package, names, Provenance::LocalFile))
    }
}
