//! PyPI JSON API client implementation using reqwest.

use std::error::Error;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, DependencyFetchError, PackageMetadata};
use crate::ports::PackageRegistry;

/// Base of the per-package metadata endpoints: `{base}/{package}/json`.
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://pypi.org/pypi";

const USER_AGENT: &str = concat!("depviz/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the registry metadata API.
///
/// Performs a single GET per call with reqwest's default settings.
#[derive(Debug, Clone)]
pub struct HttpPackageRegistry {
    base_url: Url,
    client: Client,
}

impl HttpPackageRegistry {
    /// Create a client targeting the public PyPI metadata API.
    pub fn new() -> Result<Self, AppError> {
        let base_url = Url::parse(DEFAULT_REGISTRY_BASE_URL)
            .map_err(|e| AppError::RegistryClient(format!("Invalid default registry URL: {}", e)))?;
        Self::with_base_url(base_url)
    }

    /// Create a client targeting a different metadata host.
    pub fn with_base_url(base_url: Url) -> Result<Self, AppError> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::RegistryClient(format!(
                "Registry URL '{}' cannot carry a package path",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::RegistryClient(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Metadata address for a package.
    pub fn metadata_url(&self, package: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(package).push("json");
        }
        url
    }
}

impl PackageRegistry for HttpPackageRegistry {
    fn fetch_metadata(&self, package: &str) -> Result<PackageMetadata, DependencyFetchError> {
        let url = self.metadata_url(package);
        debug!(%url, package, "Fetching package metadata");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| DependencyFetchError::Network { reason: error_chain(&e) })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Registry responded");

        if status == StatusCode::NOT_FOUND {
            return Err(DependencyFetchError::PackageNotFound { package: package.to_string() });
        }
        if !status.is_success() {
            return Err(DependencyFetchError::Http { status: status.as_u16(), url: url.to_string() });
        }

        let body = response
            .text()
            .map_err(|e| DependencyFetchError::Network { reason: error_chain(&e) })?;

        serde_json::from_str(&body).map_err(|e| DependencyFetchError::Decode { reason: e.to_string() })
    }
}

/// Render an error with every `source()` below it, joined by `": "`.
///
/// reqwest's own message omits the cause (refused connection, DNS, TLS).
fn error_chain(err: &dyn Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !reason.ends_with(&text) {
            reason.push_str(": ");
            reason.push_str(&text);
        }
        source = cause.source();
    }
    reason
}
