//! All built-in grammar extractors.
//!
//! Each submodule recognizes one family of toolchain output. The mapping
//! from [`Language`] to extractor is fixed; see [`extractor_for`].

/// Any character except a line terminator (`\r`, `\n`, U+2028, U+2029).
///
/// Used in place of `.`, which also matches `\r` in the `regex` crate, so that
/// a bare carriage return ends a match the way it ends a terminal line.
macro_rules! not_eol {
    () => {
        r"[^\r\n\x{2028}\x{2029}]"
    };
}

mod cpp;
mod generic;
mod java;
mod javascript;
mod python;

pub use cpp::CppExtractor;
pub use generic::GenericExtractor;
pub use java::JavaExtractor;
pub use javascript::JavaScriptExtractor;
pub use python::PythonExtractor;

use crate::language::Language;
use crate::GrammarExtractor;

/// Message used when a matched line carries no usable text.
pub(crate) const ERROR_DETECTED: &str = "Error detected";

/// Returns the extractor responsible for `language`.
pub fn extractor_for(language: Language) -> &'static dyn GrammarExtractor {
    match language {
        Language::Python => &PythonExtractor,
        Language::Cpp => &CppExtractor,
        Language::JavaScript => &JavaScriptExtractor,
        Language::Java => &JavaExtractor,
        Language::Generic => &GenericExtractor,
    }
}

/// Returns every built-in extractor, in [`Language::ALL`] order.
pub fn builtin_extractors() -> Vec<&'static dyn GrammarExtractor> {
    Language::ALL.into_iter().map(extractor_for).collect()
}

/// Parses a captured run of ASCII digits.
///
/// Values that do not fit a `u32` are dropped rather than wrapped.
pub(crate) fn parse_number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Trims `message`, substituting `fallback` when nothing is left.
pub(crate) fn message_or(message: &str, fallback: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_matching_extractor() {
        for lang in Language::ALL {
            assert_eq!(extractor_for(lang).language(), lang);
        }
    }

    #[test]
    fn builtin_extractor_names_unique() {
        let names: Vec<&str> = builtin_extractors().iter().map(|e| e.name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), 5);
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn parse_number_overflow() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("99999999999999"), None);
    }

    #[test]
    fn message_fallback() {
        assert_eq!(message_or("  boom \r", "x"), "boom");
        assert_eq!(message_or("   ", "x"), "x");
    }
}
