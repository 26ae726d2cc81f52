//! Parsing and validation of `errsift.toml` configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`SiftConfig`]: language aliases and a default language
//! for the extraction engine, plus output preferences for the CLI. Every
//! section is optional; an absent file is equivalent to the defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config_file, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
