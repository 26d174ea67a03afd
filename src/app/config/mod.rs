//! Filesystem-backed configuration loading.
//!
//! Pure document parsing and validation live in `domain::configuration`.

mod load_config;

pub use load_config::load_config;
