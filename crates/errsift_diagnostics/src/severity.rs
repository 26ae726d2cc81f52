//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of an extracted diagnostic.
///
/// Toolchain output only distinguishes errors from warnings. Ordered from
/// least severe (`Warning`) to most severe (`Error`), matching the derived
/// `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A potential issue reported by the toolchain that did not stop it.
    Warning,
    /// A definite problem. Used whenever the output does not say otherwise.
    #[default]
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// Maps the `error` / `warning` keyword captured from compiler output.
    ///
    /// Matching is exact: compilers print these keywords in lower case.
    pub fn from_keyword(keyword: &str) -> Option<Severity> {
        match keyword {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
