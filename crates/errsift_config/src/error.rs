//! Errors raised while reading an `errsift.toml`.

use std::path::PathBuf;

/// Why a configuration file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The configuration file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, or a field has the wrong type.
    #[error("malformed errsift.toml: {0}")]
    Syntax(String),

    /// A language tag or alias is unusable.
    #[error("invalid errsift.toml setting: {0}")]
    InvalidSetting(String),
}
