//! Configuration module for assetgen
//!
//! Resolution order:
//! 1. Explicit config path
//! 2. Environment variables (ASSETGEN_*), applied on top of whatever was loaded
//! 3. Project config (`<project>/assetgen.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_or_default, load_with_warnings, parse_with_warnings, resolve, with_env_overrides,
    CONFIG_FILE_NAME,
};
pub use types::{GeneratorConfig, GeneratorSection, OutputSection};
