//! Language tags and their mapping onto extractor families.

use std::fmt;

/// The output grammar family selected for a language tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Language {
    /// CPython tracebacks and syntax errors.
    Python,
    /// GCC, Clang and MSVC diagnostics for C and C++.
    Cpp,
    /// Node.js / browser stack traces and `tsc` output.
    JavaScript,
    /// `javac` diagnostics.
    Java,
    /// Anything else: loose `line N` / `:N:` matching.
    Generic,
}

impl Language {
    /// All languages, generic last.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Cpp,
        Language::JavaScript,
        Language::Java,
        Language::Generic,
    ];

    /// Maps a caller-supplied tag onto a known language, ignoring case.
    ///
    /// Returns `None` for tags outside the recognized vocabulary.
    pub fn known(tag: &str) -> Option<Language> {
        match tag.to_lowercase().as_str() {
            "python" => Some(Language::Python),
            "cpp" | "c++" | "c" => Some(Language::Cpp),
            "javascript" | "typescript" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Maps a tag onto a language, routing unknown tags to [`Language::Generic`].
    pub fn from_tag(tag: &str) -> Language {
        Self::known(tag).unwrap_or(Language::Generic)
    }

    /// Infers the language tag from a source file extension (without the dot).
    pub fn tag_for_extension(ext: &str) -> Option<&'static str> {
        match ext.to_lowercase().as_str() {
            "py" => Some("python"),
            "c" | "h" => Some("c"),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some("cpp"),
            "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
            "ts" | "tsx" | "mts" | "cts" => Some("typescript"),
            "java" => Some("java"),
            _ => None,
        }
    }

    /// The tags that select this language.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["python"],
            Language::Cpp => &["cpp", "c++", "c"],
            Language::JavaScript => &["javascript", "typescript"],
            Language::Java => &["java"],
            Language::Generic => &[],
        }
    }

    /// Returns the canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Generic => "generic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
