use std::fmt;

/// Which source produced a `DependencyResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Registry,
    LocalFile,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Registry => write!(f, "registry"),
            Provenance::LocalFile => write!(f, "local file"),
        }
    }
}

/// Direct dependencies of one package, as returned by a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyResult {
    package: String,
    dependencies: Vec<String>,
    provenance: Provenance,
}

impl DependencyResult {
    pub fn new(package: impl Into<String>, dependencies: Vec<String>, provenance: Provenance) -> Self {
        Self { package: package.into(), dependencies, provenance }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
