//! Pure parse/validate for the XML run configuration.

use std::path::PathBuf;

use super::document::read_fields;
use super::{ConfigError, ConfigFields, Configuration, FieldValue, SourceMode};

pub const PACKAGE_NAME: &str = "package_name";
pub const REPOSITORY_URL: &str = "repository_url";
pub const TEST_MODE: &str = "test_mode";
pub const TEST_REPOSITORY_PATH: &str = "test_repository_path";
pub const OUTPUT_FILENAME: &str = "output_filename";

const DEFAULT_TEST_MODE: &str = "false";

/// Parse and validate a configuration from XML content.
pub fn parse_config_content(content: &str) -> Result<Configuration, ConfigError> {
    let fields = read_fields(content)?;
    validate(&fields)
}

/// Validate raw document fields into a `Configuration`.
///
/// Fail-fast: the first violation is returned. `test_mode` is resolved before
/// the mode-dependent checks.
pub fn validate(fields: &ConfigFields) -> Result<Configuration, ConfigError> {
    let package_name = fields.lookup(PACKAGE_NAME).required(PACKAGE_NAME)?;
    let test_mode = parse_test_mode(&fields.lookup(TEST_MODE).or_default(DEFAULT_TEST_MODE))?;

    let (source, inactive_field) = if test_mode {
        let path = fields.lookup(TEST_REPOSITORY_PATH).required(TEST_REPOSITORY_PATH)?;
        (SourceMode::LocalFile { path: PathBuf::from(path) }, REPOSITORY_URL)
    } else {
        let url = fields.lookup(REPOSITORY_URL).required(REPOSITORY_URL)?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidRepositoryUrl { url });
        }
        (SourceMode::Registry { url }, TEST_REPOSITORY_PATH)
    };

    let output_filename = fields.lookup(OUTPUT_FILENAME).required(OUTPUT_FILENAME)?;

    let inactive = match fields.lookup(inactive_field) {
        FieldValue::Present(value) => Some(value),
        FieldValue::Empty | FieldValue::Missing => None,
    };
    Ok(Configuration::new(package_name, source, output_filename)
        .with_inactive_source_field(inactive))
}

/// Accept `true`/`false` in any casing.
pub fn parse_test_mode(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidTestMode { value: raw.trim().to_string() }),
    }
}
