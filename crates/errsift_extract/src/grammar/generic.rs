//! Fallback for languages without a dedicated grammar.

use std::sync::LazyLock;

use errsift_diagnostics::Diagnostic;
use regex::Regex;

use super::{message_or, parse_number, ERROR_DETECTED};
use crate::language::Language;
use crate::GrammarExtractor;

/// `line N` (any case) or `:N` followed by `:`, `,`, whitespace or end of line.
static LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:line\s+|:)([0-9]+)(?::|,|\s|$)").expect("valid generic pattern")
});

/// Extracts any line that mentions a line number.
///
/// The whole trimmed line becomes the message; every hit is a full-line error.
pub struct GenericExtractor;

impl GrammarExtractor for GenericExtractor {
    fn language(&self) -> Language {
        Language::Generic
    }

    fn name(&self) -> &str {
        "generic"
    }

    fn description(&self) -> &str {
        "any line mentioning `line N` or `:N:`"
    }

    fn extract(&self, text: &str) -> Vec<Diagnostic> {
        text.split('\n')
            .filter_map(|line| {
                let caps = LINE_NUMBER.captures(line)?;
                let line_number = parse_number(&caps[1])?;
                tracing::trace!(line = line_number, "generic line reference");
                Some(Diagnostic::error(line_number, message_or(line, ERROR_DETECTED)))
            })
            .collect()
    }
}
