pub mod document;
pub mod error;
pub mod field;
pub mod model;
pub mod parse;

pub use error::ConfigError;
pub use field::{ConfigFields, FieldValue};
pub use model::{ConfigWarning, Configuration, SourceMode};
pub use parse::parse_config_content;
