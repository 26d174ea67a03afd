//! Validated configuration model.

use std::fmt;
use std::path::{Path, PathBuf};

/// Output extensions the graph writer is expected to understand.
pub const SUPPORTED_OUTPUT_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".svg", ".pdf"];

/// Where dependencies are looked up, decided once during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Query the package registry's metadata API.
    Registry { url: String },
    /// Read the local substitute-registry file (test mode).
    LocalFile { path: PathBuf },
}

impl SourceMode {
    pub fn is_test_mode(&self) -> bool {
        matches!(self, SourceMode::LocalFile { .. })
    }
}

/// A fully validated run configuration.
///
/// Only constructed by the validation step, so every instance satisfies the
/// per-mode required-field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    package_name: String,
    source: SourceMode,
    output_filename: String,
    /// Text of the other mode's source field, kept only for display.
    inactive_source_field: Option<String>,
}

impl Configuration {
    pub(crate) fn new(package_name: String, source: SourceMode, output_filename: String) -> Self {
        Self { package_name, source, output_filename, inactive_source_field: None }
    }

    /// Keep the unused mode's field (`repository_url` in test mode,
    /// `test_repository_path` otherwise) so dumps show every key.
    pub(crate) fn with_inactive_source_field(mut self, value: Option<String>) -> Self {
        self.inactive_source_field = value;
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn source(&self) -> &SourceMode {
        &self.source
    }

    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    /// Canonical lower-case `test_mode` value.
    pub fn test_mode(&self) -> &'static str {
        if self.source.is_test_mode() { "true" } else { "false" }
    }

    pub fn repository_url(&self) -> Option<&str> {
        match &self.source {
            SourceMode::Registry { url } => Some(url),
            SourceMode::LocalFile { .. } => None,
        }
    }

    pub fn test_repository_path(&self) -> Option<&Path> {
        match &self.source {
            SourceMode::LocalFile { path } => Some(path),
            SourceMode::Registry { .. } => None,
        }
    }

    /// Key-value view of all five fields in document order, for console dumps.
    ///
    /// The inactive mode's field shows its text as given, or is blank.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let inactive = self.inactive_source_field.clone().unwrap_or_default();
        let (repository_url, test_repository_path) = match &self.source {
            SourceMode::Registry { url } => (url.clone(), inactive),
            SourceMode::LocalFile { path } => (inactive, path.display().to_string()),
        };

        vec![
            ("package_name", self.package_name.clone()),
            ("repository_url", repository_url),
            ("test_mode", self.test_mode().to_string()),
            ("test_repository_path", test_repository_path),
            ("output_filename", self.output_filename.clone()),
        ]
    }

    /// Non-fatal advisories about unusual but accepted values.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let SourceMode::LocalFile { path } = &self.source {
            let is_txt = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if !is_txt {
                warnings.push(ConfigWarning::TestRepositoryNotTxt { path: path.clone() });
            }
        }

        let lower = self.output_filename.to_lowercase();
        if !SUPPORTED_OUTPUT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            warnings.push(ConfigWarning::UnusualOutputExtension {
                filename: self.output_filename.clone(),
            });
        }

        warnings
    }
}

/// Advisory raised for accepted configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    TestRepositoryNotTxt { path: PathBuf },
    UnusualOutputExtension { filename: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::TestRepositoryNotTxt { path } => write!(
                f,
                "test repository '{}' is expected to be a .txt file",
                path.display()
            ),
            ConfigWarning::UnusualOutputExtension { filename } => write!(
                f,
                "output file '{}' has a non-standard extension (expected one of {})",
                filename,
                SUPPORTED_OUTPUT_EXTENSIONS.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(path: &str, output: &str) -> Configuration {
        Configuration::new(
            "mypkg".into(),
            SourceMode::LocalFile { path: PathBuf::from(path) },
            output.into(),
        )
    }

    #[test]
    fn accessors_follow_source_mode() {
        let config = Configuration::new(
            "requests".into(),
            SourceMode::Registry { url: "https://pypi.org/simple/".into() },
            "graph.png".into(),
        );

        assert_eq!(config.test_mode(), "false");
        assert_eq!(config.repository_url(), Some("https://pypi.org/simple/"));
        assert!(config.test_repository_path().is_none());

        let config = local("repo.txt", "graph.svg");
        assert_eq!(config.test_mode(), "true");
        assert!(config.repository_url().is_none());
    }

    #[test]
    fn entries_list_every_field_in_document_order() {
        let config = local("repo.txt", "graph.png")
            .with_inactive_source_field(Some("https://pypi.org/simple/".into()));
        let entries = config.entries();

        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["package_name", "repository_url", "test_mode", "test_repository_path", "output_filename"]
        );
        assert_eq!(entries[1].1, "https://pypi.org/simple/");
        assert_eq!(entries[3].1, "repo.txt");
    }

    #[test]
    fn entries_leave_absent_inactive_field_blank() {
        let entries = local("repo.txt", "graph.png").entries();
        assert_eq!(entries[1], ("repository_url", String::new()));
    }

    #[test]
    fn no_warnings_for_conventional_values() {
        assert!(local("repo.TXT", "Graph.PDF").warnings().is_empty());
    }

    #[test]
    fn warns_about_unusual_extensions() {
        let warnings = local("repo.csv", "graph.dot").warnings();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], ConfigWarning::TestRepositoryNotTxt { .. }));
        assert!(warnings[1].to_string().contains("graph.dot"));
    }
}
