//! Configuration loading from the filesystem.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::configuration::parse_config_content;
use crate::domain::{ConfigError, Configuration};
use crate::ports::LocalFilesystem;

/// Load and validate the XML configuration at `path`.
///
/// Advisory warnings are logged; they never fail the load.
pub fn load_config<F: LocalFilesystem>(
    path: &Path,
    filesystem: &F,
) -> Result<Configuration, ConfigError> {
    if !filesystem.file_exists(path) {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }

    let content = filesystem
        .read_file(path)
        .map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(), source })?;

    let config = parse_config_content(&content)?;
    debug!(path = %path.display(), package = config.package_name(), "Loaded configuration");

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    Ok(config)
}
