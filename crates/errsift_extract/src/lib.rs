//! Heuristic extraction of positioned diagnostics from toolchain output.
//!
//! This crate turns the raw text a compiler or interpreter prints (GCC/Clang
//! and MSVC error streams, Python tracebacks, Node.js stack traces, `javac`
//! output) into [`Diagnostic`]s that an editor can anchor inline.
//!
//! # Pipeline
//!
//! 1. The dispatcher normalizes the language tag and picks a
//!    [`GrammarExtractor`], falling back to the generic one.
//! 2. The extractor scans the text line by line and yields candidates in
//!    encounter order. Independent rules may report the same line twice.
//! 3. The post-filter drops candidates without a positive line.
//!
//! Extraction never fails: unrecognized text yields an empty sequence.

#![warn(missing_docs)]

mod engine;
mod filter;
mod grammar;
mod language;
mod report;
mod synthetic;

pub use engine::{extract_diagnostics, ExtractEngine};
pub use errsift_diagnostics::{Diagnostic, Severity};
pub use filter::retain_anchored;
pub use grammar::{
    builtin_extractors, extractor_for, CppExtractor, GenericExtractor, JavaExtractor,
    JavaScriptExtractor, PythonExtractor,
};
pub use language::Language;
pub use report::{extract_from_report, ExecutionReport};
pub use synthetic::{synthetic_diagnostic, UNKNOWN_ERROR_MESSAGE};

/// One grammar of toolchain output, e.g. Python tracebacks.
///
/// Implementations are stateless. `extract` must accept any text, including
/// mixed line endings and garbage, and report candidates in the order they
/// are found. Candidates may carry a line of zero; the dispatcher removes
/// them before anything reaches the caller.
pub trait GrammarExtractor: Send + Sync {
    /// Returns the language family this extractor handles.
    fn language(&self) -> Language;

    /// Returns the short kebab-case name of this extractor (e.g. "python-traceback").
    fn name(&self) -> &str;

    /// Returns a human-readable description of the recognized formats.
    fn description(&self) -> &str;

    /// Scans `text` and returns every candidate diagnostic in encounter order.
    fn extract(&self, text: &str) -> Vec<Diagnostic>;
}
