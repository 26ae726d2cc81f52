//! Diagnostic rendering backends for human-readable output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use crate::source_file::SourceFile;
use owo_colors::OwoColorize;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic, optionally against the source it points into.
    fn render(&self, diag: &Diagnostic, source: Option<&SourceFile>) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error: expected ';' before 'return'
///   --> main.cpp:10:3
///    |
/// 10 |   return 0
///    |   ^^^^^
/// ```
/// The underline is clamped to the end of the source line, so a full-line
/// end column underlines the rest of the line.
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether to show the offending source line when it is available.
    pub context: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, context: bool) -> Self {
        Self { color, context }
    }

    fn paint(&self, text: &str, severity: Severity) -> String {
        if !self.color {
            return text.to_string();
        }
        match severity {
            Severity::Error => text.red().bold().to_string(),
            Severity::Warning => text.yellow().bold().to_string(),
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source: Option<&SourceFile>) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}: {}\n",
            self.paint(&diag.severity.to_string(), diag.severity),
            diag.message
        ));

        match source {
            Some(file) => out.push_str(&format!(
                "  --> {}:{}:{}\n",
                file.path.display(),
                diag.line,
                diag.column
            )),
            None => out.push_str(&format!("  --> line {}:{}\n", diag.line, diag.column)),
        }

        let line_text = source
            .filter(|_| self.context)
            .and_then(|file| file.line_text(diag.line));
        if let Some(line_text) = line_text {
            let line_num = diag.line.to_string();
            let padding = " ".repeat(line_num.len());

            let line_len = line_text.chars().count() as u32;
            let end = diag.end_column.min(line_len + 1);
            let width = end.saturating_sub(diag.column).max(1) as usize;
            let carets = self.paint(&"^".repeat(width), diag.severity);
            let col_padding = " ".repeat(diag.column.saturating_sub(1).min(line_len) as usize);

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_text}\n"));
            out.push_str(&format!("{padding} | {col_padding}{carets}\n"));
        }

        out
    }
}
