//! Registry metadata document and requirement-name extraction.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Characters that start a version, direct-URL or environment-marker qualifier.
const QUALIFIER_STARTS: [char; 8] = ['<', '>', '=', '!', '~', ';', '(', '@'];

/// Per-package metadata as served by the registry JSON API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageMetadata {
    pub info: PackageInfo,
}

/// The `info` object of a metadata document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageInfo {
    /// Requirement strings such as `"idna (<4,>=2.5)"`. The registry sends
    /// `null` when a release declares none.
    #[serde(default)]
    pub requires_dist: Option<Vec<String>>,
    /// Legacy plain-name requirement list.
    #[serde(default)]
    pub requires: Option<Vec<String>>,
}

impl PackageMetadata {
    /// Distinct direct dependency names declared by this metadata.
    ///
    /// Reads `requires_dist` and falls back to `requires` only when the
    /// former is absent or empty.
    pub fn dependency_names(&self) -> BTreeSet<String> {
        match self.info.requires_dist.as_deref() {
            Some(entries) if !entries.is_empty() => {
                entries.iter().filter_map(|entry| requirement_name(entry)).collect()
            }
            _ => self
                .info
                .requires
                .iter()
                .flatten()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }
}

/// Extract the dependency name from a requirement string.
///
/// Takes the text before the first whitespace, then cuts it before any
/// version or marker qualifier. Extras attached to the name (`bar[extra]`)
/// are kept. Entries that are themselves bracketed qualifiers yield `None`.
pub fn requirement_name(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.starts_with('[') {
        return None;
    }

    let token = entry.split_whitespace().next()?;
    let name = match token.find(QUALIFIER_STARTS) {
        Some(index) => &token[..index],
        None => token,
    };

    if name.is_empty() { None } else { Some(name.to_string()) }
}
