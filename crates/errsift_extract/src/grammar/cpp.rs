//! GCC, Clang and MSVC-style compiler diagnostics for C and C++.

use std::sync::LazyLock;

use errsift_diagnostics::{Diagnostic, Severity};
use regex::{Captures, Regex};

use super::{message_or, parse_number, ERROR_DETECTED};
use crate::language::Language;
use crate::GrammarExtractor;

/// `main.cpp:10:3: error: message`
static COLON_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        not_eol!(),
        r"*?:([0-9]+):([0-9]+):\s*(error|warning):\s*(",
        not_eol!(),
        "+)"
    ))
    .expect("valid gcc pattern")
});

/// `main.cpp(10,3): error: message`
static PAREN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        not_eol!(),
        r"*?\(([0-9]+),([0-9]+)\):\s*(error|warning):\s*(",
        not_eol!(),
        "+)"
    ))
    .expect("valid msvc pattern")
});

/// Extracts diagnostics from C and C++ compiler output.
///
/// Recognizes `path:line:column: error|warning: message` (GCC/Clang) and
/// `path(line,column): error|warning: message`. The two patterns are tried
/// independently, so a line matching both yields two diagnostics. The
/// underline is a fixed five columns wide from the reported column.
pub struct CppExtractor;

impl GrammarExtractor for CppExtractor {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn name(&self) -> &str {
        "c-compiler"
    }

    fn description(&self) -> &str {
        "GCC/Clang `file:line:col: error:` and `file(line,col): error:` messages"
    }

    fn extract(&self, text: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for line in text.split('\n') {
            for pattern in [&*COLON_STYLE, &*PAREN_STYLE] {
                if let Some(diag) = pattern.captures(line).and_then(|caps| from_captures(&caps)) {
                    diagnostics.push(diag);
                }
            }
        }
        diagnostics
    }
}

/// Builds a diagnostic from `(line, column, severity, message)` captures.
fn from_captures(caps: &Captures<'_>) -> Option<Diagnostic> {
    let line = parse_number(&caps[1])?;
    let column = parse_number(&caps[2])?;
    let severity = Severity::from_keyword(&caps[3]).unwrap_or_default();
    let message = message_or(&caps[4], ERROR_DETECTED);
    tracing::trace!(line, column, %severity, "compiler diagnostic");
    Some(Diagnostic::new(severity, line, message).with_column(column))
}
