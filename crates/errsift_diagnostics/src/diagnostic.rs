//! The positioned diagnostic record produced by every extractor.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// End-column sentinel meaning "underline to the end of the line".
pub const FULL_LINE_END: u32 = 1000;

/// Width of the underline synthesized when a grammar reports a column but no extent.
pub const SPAN_WIDTH: u32 = 5;

/// A diagnostic anchored at a line (and optionally a column range) of the
/// source that produced the toolchain output.
///
/// Serialized in camelCase (`endColumn`) because editors consume it as a
/// plain marker record. Lines and columns are 1-based; a `line` of zero
/// marks a candidate that must not reach the caller (see [`is_anchored`]).
///
/// [`is_anchored`]: Diagnostic::is_anchored
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The 1-based source line.
    pub line: u32,
    /// The 1-based column where the underline starts.
    pub column: u32,
    /// The column where the underline ends. Rendering hint only.
    pub end_column: u32,
    /// The diagnostic message. Never empty.
    pub message: String,
    /// Whether the toolchain reported an error or a warning.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a full-line diagnostic at `line` with the given severity.
    pub fn new(severity: Severity, line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column: 1,
            end_column: FULL_LINE_END,
            message: message.into(),
            severity,
        }
    }

    /// Creates a full-line error diagnostic at `line`.
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, line, message)
    }

    /// Creates a full-line warning diagnostic at `line`.
    pub fn warning(line: u32, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, line, message)
    }

    /// Anchors the diagnostic at `column` with a fixed-width underline.
    ///
    /// Column zero is clamped to 1 so the underline always starts on the line.
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = column.max(1);
        self.end_column = self.column.saturating_add(SPAN_WIDTH);
        self
    }

    /// Returns `true` if the diagnostic points at a real (positive) line.
    pub fn is_anchored(&self) -> bool {
        self.line > 0
    }
}
