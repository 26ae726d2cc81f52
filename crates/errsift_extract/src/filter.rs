//! Post-filter applied to every extractor's output.

use errsift_diagnostics::Diagnostic;

/// Drops candidates that are not anchored at a positive line.
///
/// Order of the remaining diagnostics is preserved.
pub fn retain_anchored(mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let before = diagnostics.len();
    diagnostics.retain(Diagnostic::is_anchored);
    let dropped = before - diagnostics.len();
    if dropped > 0 {
        tracing::trace!(dropped, "dropped diagnostics without a positive line");
    }
    diagnostics
}
