//! Source text with line-start indexing for fast line lookup.

use std::path::PathBuf;

/// The source file a piece of toolchain output refers to.
///
/// Stores the file's content along with precomputed line-start offsets so
/// renderers can show the line a diagnostic is anchored at.
pub struct SourceFile {
    /// The filesystem path of this file (or a synthetic name such as `<stdin>`).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Returns the text of the 1-based `line`, without its line terminator.
    ///
    /// Returns `None` for line 0 and for lines past the end of the file.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |next| next - 1);
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
