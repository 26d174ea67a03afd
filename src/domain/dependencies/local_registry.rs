//! Lookup in the line-oriented substitute-registry format.
//!
//! ```text
//! requests: urllib3, idna, certifi
//! flask: werkzeug, jinja2
//! ```

/// Find the dependencies listed for `package`.
///
/// Keys are compared trimmed and case-insensitively; the first matching line
/// wins. Order is preserved and duplicates are kept. Lines without a colon
/// are ignored. Returns `None` when no line matches.
pub fn find_dependencies(content: &str, package: &str) -> Option<Vec<String>> {
    let wanted = package.trim().to_lowercase();

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().to_lowercase() == wanted)
        .map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
}
