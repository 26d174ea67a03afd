//! CLI Adapter.

mod output;

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::app::config::load_config;
use crate::app::logging;
use crate::app::services::DependencyResolver;
use crate::domain::AppError;
use crate::services::{DEFAULT_REGISTRY_BASE_URL, HttpPackageRegistry, StdFilesystem};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.xml";

#[derive(Parser)]
#[command(name = "depviz")]
#[command(version)]
#[command(
    about = "Resolve the direct dependencies of a package described by an XML configuration",
    long_about = None
)]
struct Cli {
    /// Path to the XML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Base URL of the registry metadata API ({base}/{package}/json)
    #[arg(long, env = "DEPVIZ_REGISTRY_URL", default_value = DEFAULT_REGISTRY_BASE_URL)]
    registry_url: Url,

    /// Log filter directive, e.g. `warn` or `depviz=debug`
    #[arg(long, env = logging::LOG_ENV)]
    log_level: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    logging::init(cli.log_level.as_deref())?;

    let config = load_config(&cli.config, &StdFilesystem)?;
    output::print_config(&config);

    let registry = HttpPackageRegistry::with_base_url(cli.registry_url)?;
    let resolver = DependencyResolver::new(registry, StdFilesystem);
    let result = resolver.resolve(&config)?;
    output::print_dependencies(&config, &result);

    Ok(())
}
