//! Logging setup for the CLI.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable consulted when no explicit filter is given.
pub const LOG_ENV: &str = "DEPVIZ_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the log filter from an explicit directive or the default.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, AppError> {
    let directive = directive.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directive)
        .map_err(|e| AppError::Logging(format!("invalid log filter '{}': {}", directive, e)))
}

/// Install a global subscriber that writes to stderr.
///
/// stdout is reserved for the configuration dump and dependency list.
pub fn init(directive: Option<&str>) -> Result<(), AppError> {
    let filter = build_filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
