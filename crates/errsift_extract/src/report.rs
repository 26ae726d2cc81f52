//! Extraction from the result objects returned by a code execution service.

use errsift_diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::engine::ExtractEngine;
use crate::synthetic::synthetic_diagnostic;

/// The outcome of running a snippet remotely.
///
/// Mirrors the `{success, stdout, stderr, error}` objects produced by the
/// execution backend. `error` carries a service-level failure such as
/// "Compilation failed" or "Execution timed out".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Whether the program ran and exited with status zero.
    #[serde(default)]
    pub success: bool,
    /// Captured standard output.
    #[serde(default)]
    pub stdout: String,
    /// Captured standard error.
    #[serde(default)]
    pub stderr: String,
    /// Service-level error message, if any.
    #[serde(default)]
    pub error: Option<String>,
}

impl ExtractEngine {
    /// Extracts diagnostics from an execution report.
    ///
    /// `stderr` is used when it has any non-whitespace content, otherwise
    /// the `error` field. A failed run that yields nothing positional but
    /// carries an `error` message produces one synthetic diagnostic at line 1.
    pub fn run_report(&self, report: &ExecutionReport, tag: &str) -> Vec<Diagnostic> {
        let text = if report.stderr.trim().is_empty() {
            report.error.as_deref()
        } else {
            Some(report.stderr.as_str())
        };

        let diagnostics = self.run(text, tag);
        if !diagnostics.is_empty() || report.success {
            return diagnostics;
        }

        match report.error.as_deref().filter(|e| !e.trim().is_empty()) {
            Some(error) => {
                tracing::debug!(error = %error, "no positional diagnostics, reporting service error");
                vec![synthetic_diagnostic(error, None)]
            }
            None => diagnostics,
        }
    }
}

/// Extracts diagnostics from an execution report with the default engine.
pub fn extract_from_report(report: &ExecutionReport, tag: &str) -> Vec<Diagnostic> {
    ExtractEngine::with_defaults().run_report(report, tag)
}
