//! Diagnostics for failures that carry no parseable position.

use errsift_diagnostics::Diagnostic;

/// Message used when a synthetic diagnostic is requested with blank text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Builds a single full-line error from an arbitrary message.
///
/// For callers that only have an error string (a timeout, a failed request)
/// but still want something anchored in the editor. `line` defaults to 1,
/// and a non-positive line is treated as absent.
pub fn synthetic_diagnostic(message: &str, line: Option<u32>) -> Diagnostic {
    let line = line.filter(|&l| l > 0).unwrap_or(1);
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE
    } else {
        message
    };
    Diagnostic::error(line, message)
}
