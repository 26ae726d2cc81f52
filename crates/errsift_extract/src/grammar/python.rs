//! CPython tracebacks and exception lines.

use std::sync::LazyLock;

use errsift_diagnostics::Diagnostic;
use regex::Regex;

use super::parse_number;
use crate::language::Language;
use crate::GrammarExtractor;

/// `File "<path>", line <N>`, with an optional `, in <scope>` tail.
static FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r#"File ""#, not_eol!(), r#"*?", line ([0-9]+)"#)).expect("valid frame pattern")
});

static LINE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line ([0-9]+)").expect("valid line pattern"));

const EXCEPTION_MARKERS: [&str; 3] = ["SyntaxError:", "IndentationError:", "NameError:"];

/// Lines after a frame searched for its message.
const MESSAGE_LOOKAHEAD: usize = 4;

/// Lines before an exception line searched for its line number.
const LINE_LOOKBEHIND: usize = 5;

const FRAME_FALLBACK: &str = "Syntax or runtime error";

/// Extracts diagnostics from Python tracebacks.
///
/// Two independent rules run on every line:
///
/// - a traceback frame (`File "main.py", line 5, in <module>`) anchors a
///   diagnostic at the frame's line, taking its message from the first
///   following line that is neither another frame nor a `^` caret marker;
/// - a `SyntaxError:`, `IndentationError:` or `NameError:` line becomes a
///   diagnostic carrying that line verbatim, anchored at the first `line N`
///   among the five lines before it (line 1 if there is none).
///
/// Both rules can report the same location; duplicates are kept.
pub struct PythonExtractor;

impl GrammarExtractor for PythonExtractor {
    fn language(&self) -> Language {
        Language::Python
    }

    fn name(&self) -> &str {
        "python-traceback"
    }

    fn description(&self) -> &str {
        "traceback frames and SyntaxError/IndentationError/NameError lines"
    }

    fn extract(&self, text: &str) -> Vec<Diagnostic> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut diagnostics = Vec::new();

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            if let Some(caps) = FRAME.captures(line) {
                if let Some(line_number) = parse_number(&caps[1]) {
                    let message = lines
                        .iter()
                        .skip(i + 1)
                        .take(MESSAGE_LOOKAHEAD)
                        .map(|next| next.trim())
                        .find(|next| {
                            !next.is_empty() && !next.starts_with("File ") && !next.starts_with('^')
                        })
                        .unwrap_or(FRAME_FALLBACK);
                    tracing::trace!(line = line_number, "python traceback frame");
                    diagnostics.push(Diagnostic::error(line_number, message));
                }
            }

            if EXCEPTION_MARKERS.iter().any(|marker| line.contains(marker)) {
                // A `line N` too large for a u32 is skipped, not wrapped; the
                // next reference in the window anchors the exception instead.
                let line_number = lines[i.saturating_sub(LINE_LOOKBEHIND)..i]
                    .iter()
                    .find_map(|prev| {
                        LINE_REF
                            .captures(prev)
                            .and_then(|caps| parse_number(&caps[1]))
                    })
                    .unwrap_or(1);
                tracing::trace!(line = line_number, "python exception line");
                diagnostics.push(Diagnostic::error(line_number, line));
            }
        }

        diagnostics
    }
}
