//! Configuration types deserialized from `errsift.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level configuration parsed from `errsift.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct SiftConfig {
    /// Extraction settings (aliases, default language).
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Output settings for the command-line front end.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings that influence which extractor handles a piece of output.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Language tag used when the caller supplies none and none can be inferred.
    #[serde(default)]
    pub default_language: Option<String>,
    /// Extra language tags mapped onto known ones (e.g. `py = "python"`).
    ///
    /// Keys are matched case-insensitively. A target that is not a known
    /// tag routes to the generic extractor like any other unknown tag.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Output preferences for rendering extracted diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// The default report format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether to show the offending source line when the source is available.
    #[serde(default = "default_context")]
    pub context: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            context: default_context(),
        }
    }
}

fn default_context() -> bool {
    true
}

/// How diagnostics are printed.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}
