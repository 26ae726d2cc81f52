//! `javac` diagnostics.

use std::sync::LazyLock;

use errsift_diagnostics::{Diagnostic, Severity};
use regex::Regex;

use super::{message_or, parse_number, ERROR_DETECTED};
use crate::language::Language;
use crate::GrammarExtractor;

/// `Main.java:5: error: message`
static JAVAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        not_eol!(),
        r"*?:([0-9]+):\s*(error|warning):\s*(",
        not_eol!(),
        "+)"
    ))
    .expect("valid javac pattern")
});

/// Extracts `path:line: error|warning: message` lines.
///
/// `javac` reports no column, so diagnostics span the whole line.
pub struct JavaExtractor;

impl GrammarExtractor for JavaExtractor {
    fn language(&self) -> Language {
        Language::Java
    }

    fn name(&self) -> &str {
        "javac"
    }

    fn description(&self) -> &str {
        "`File.java:line: error:` and `warning:` messages"
    }

    fn extract(&self, text: &str) -> Vec<Diagnostic> {
        text.split('\n')
            .filter_map(|line| JAVAC.captures(line))
            .filter_map(|caps| {
                let line = parse_number(&caps[1])?;
                let severity = Severity::from_keyword(&caps[2]).unwrap_or_default();
                let message = message_or(&caps[3], ERROR_DETECTED);
                tracing::trace!(line, %severity, "javac diagnostic");
                Some(Diagnostic::new(severity, line, message))
            })
            .collect()
    }
}
