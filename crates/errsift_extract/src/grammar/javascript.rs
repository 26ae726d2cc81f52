//! Node.js and browser stack traces, and `tsc` locations.

use std::sync::LazyLock;

use errsift_diagnostics::Diagnostic;
use regex::Regex;

use super::{message_or, parse_number};
use crate::language::Language;
use crate::GrammarExtractor;

/// `<anything>:line:column` anywhere in the line.
static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(not_eol!(), r"*?:([0-9]+):([0-9]+)")).expect("valid location pattern")
});

/// `at <anything>line:column`, as in stack frames.
static STACK_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!("at", not_eol!(), r"*?([0-9]+):([0-9]+)")).expect("valid frame pattern")
});

/// Colon-separated fields dropped before the message when rebuilding it.
const LOCATION_FIELDS: usize = 3;

const LOCATION_FALLBACK: &str = "JavaScript error";
const FRAME_MESSAGE: &str = "JavaScript runtime error";

/// Extracts diagnostics from JavaScript and TypeScript output.
///
/// A `file:line:column` location produces a diagnostic whose message is
/// whatever follows the third colon of the line. This is fragile (stack
/// frames rarely have that shape) and kept as-is. An `at ... line:column`
/// stack frame independently produces a diagnostic with a fixed message,
/// so a typical frame line is reported twice.
pub struct JavaScriptExtractor;

impl GrammarExtractor for JavaScriptExtractor {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn name(&self) -> &str {
        "javascript-stack"
    }

    fn description(&self) -> &str {
        "`file:line:col` locations and `at ... line:col` stack frames"
    }

    fn extract(&self, text: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for line in text.split('\n') {
            if let Some(caps) = LOCATION.captures(line) {
                if let (Some(line_number), Some(column)) =
                    (parse_number(&caps[1]), parse_number(&caps[2]))
                {
                    let tail = line
                        .split(':')
                        .skip(LOCATION_FIELDS)
                        .collect::<Vec<_>>()
                        .join(":");
                    let message = message_or(&tail, LOCATION_FALLBACK);
                    tracing::trace!(line = line_number, column, "javascript location");
                    diagnostics.push(Diagnostic::error(line_number, message).with_column(column));
                }
            }

            if let Some(caps) = STACK_FRAME.captures(line) {
                if let (Some(line_number), Some(column)) =
                    (parse_number(&caps[1]), parse_number(&caps[2]))
                {
                    tracing::trace!(line = line_number, column, "javascript stack frame");
                    diagnostics
                        .push(Diagnostic::error(line_number, FRAME_MESSAGE).with_column(column));
                }
            }
        }

        diagnostics
    }
}
