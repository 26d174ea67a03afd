use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{DependencyFetchError, PackageInfo, PackageMetadata};
use crate::ports::PackageRegistry;

/// In-memory registry that records every requested package.
#[derive(Clone, Default)]
pub struct FakePackageRegistry {
    packages: HashMap<String, PackageMetadata>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakePackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requires_dist(mut self, package: &str, requires_dist: &[&str]) -> Self {
        let info = PackageInfo {
            requires_dist: Some(requires_dist.iter().map(|s| s.to_string()).collect()),
            requires: None,
        };
        self.packages.insert(package.to_string(), PackageMetadata { info });
        self
    }

    pub fn with_requires(mut self, package: &str, requires: &[&str]) -> Self {
        let info = PackageInfo {
            requires_dist: None,
            requires: Some(requires.iter().map(|s| s.to_string()).collect()),
        };
        self.packages.insert(package.to_string(), PackageMetadata { info });
        self
    }

    pub fn requested_packages(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PackageRegistry for FakePackageRegistry {
    fn fetch_metadata(&self, package: &str) -> Result<PackageMetadata, DependencyFetchError> {
        self.requested.lock().unwrap().push(package.to_string());
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| DependencyFetchError::PackageNotFound { package: package.to_string() })
    }
}
