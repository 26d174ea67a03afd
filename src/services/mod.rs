mod pypi_registry_http;
mod std_filesystem;

pub use pypi_registry_http::{DEFAULT_REGISTRY_BASE_URL, HttpPackageRegistry};
pub use std_filesystem::StdFilesystem;
