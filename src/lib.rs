//! depviz: resolve the direct dependencies of a package described by an XML
//! configuration, from PyPI or from a local substitute-registry file.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::services::DependencyResolver;
use services::{HttpPackageRegistry, StdFilesystem};

pub use domain::{
    AppError, ConfigError, ConfigWarning, Configuration, DependencyFetchError, DependencyResult,
    Provenance, SourceMode,
};

/// Load and validate the XML configuration at `path`.
pub fn load_config(path: &Path) -> Result<Configuration, AppError> {
    Ok(app::config::load_config(path, &StdFilesystem)?)
}

/// Resolve the direct dependencies of the configured package.
///
/// Registry mode queries the public PyPI metadata API; test mode reads the
/// configured substitute-registry file.
pub fn resolve_dependencies(config: &Configuration) -> Result<DependencyResult, AppError> {
    let resolver = DependencyResolver::new(HttpPackageRegistry::new()?, StdFilesystem);
    Ok(resolver.resolve(config)?)
}
