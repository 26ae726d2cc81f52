//! Dispatch from a language tag to an extractor, followed by the post-filter.
//!
//! [`extract_diagnostics`] is the plain entry point. [`ExtractEngine`] adds
//! the configurable parts: tag aliases and a default language from an
//! `ExtractConfig`.

use std::collections::HashMap;

use errsift_config::ExtractConfig;
use errsift_diagnostics::Diagnostic;

use crate::filter::retain_anchored;
use crate::grammar::extractor_for;
use crate::language::Language;

/// Extracts diagnostics from `raw` using the grammar selected by `tag`.
///
/// Empty or absent text yields an empty sequence. The tag is matched
/// case-insensitively; unknown tags use the generic extractor. Every
/// returned diagnostic has a positive line.
pub fn extract_diagnostics<'a>(raw: impl Into<Option<&'a str>>, tag: &str) -> Vec<Diagnostic> {
    run_language(raw.into(), Language::from_tag(tag))
}

fn run_language(raw: Option<&str>, language: Language) -> Vec<Diagnostic> {
    let Some(text) = raw.filter(|text| !text.is_empty()) else {
        return Vec::new();
    };
    let extractor = extractor_for(language);
    tracing::debug!(
        language = language.name(),
        extractor = extractor.name(),
        bytes = text.len(),
        "extracting diagnostics"
    );
    let diagnostics = retain_anchored(extractor.extract(text));
    tracing::debug!(count = diagnostics.len(), "extraction finished");
    diagnostics
}

/// A dispatcher configured with extra language tags.
///
/// Built-in tags always take precedence over aliases. An alias whose target
/// is not a built-in tag resolves to the generic extractor.
#[derive(Debug, Default)]
pub struct ExtractEngine {
    /// Lower-cased alias tag to the language it selects.
    aliases: HashMap<String, Language>,
    /// Tag used by [`run_or_default`](Self::run_or_default) when none is supplied.
    default_language: Option<String>,
}

impl ExtractEngine {
    /// Creates an engine configured by the given `ExtractConfig`.
    pub fn new(config: &ExtractConfig) -> Self {
        let aliases = config
            .aliases
            .iter()
            .map(|(alias, target)| (alias.to_lowercase(), Language::from_tag(target)))
            .collect();
        Self {
            aliases,
            default_language: config.default_language.clone(),
        }
    }

    /// Creates an engine with no aliases and no default language.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolves a tag to the language whose extractor will handle it.
    pub fn resolve(&self, tag: &str) -> Language {
        Language::known(tag)
            .or_else(|| self.aliases.get(&tag.to_lowercase()).copied())
            .unwrap_or(Language::Generic)
    }

    /// Extracts diagnostics from `raw` using the grammar selected by `tag`.
    pub fn run<'a>(&self, raw: impl Into<Option<&'a str>>, tag: &str) -> Vec<Diagnostic> {
        run_language(raw.into(), self.resolve(tag))
    }

    /// Like [`run`](Self::run), but falls back to the configured default
    /// language when `tag` is `None`.
    pub fn run_or_default<'a>(
        &self,
        raw: impl Into<Option<&'a str>>,
        tag: Option<&str>,
    ) -> Vec<Diagnostic> {
        let tag = tag.or(self.default_language.as_deref()).unwrap_or("");
        self.run(raw, tag)
    }

    /// Returns the configured default language tag, if any.
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Returns the configured aliases, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, Language)> {
        let mut aliases: Vec<(&str, Language)> = self
            .aliases
            .iter()
            .map(|(alias, lang)| (alias.as_str(), *lang))
            .collect();
        aliases.sort_by(|a, b| a.0.cmp(b.0));
        aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config(aliases: &[(&str, &str)], default_language: Option<&str>) -> ExtractConfig {
        ExtractConfig {
            default_language: default_language.map(str::to_string),
            aliases: aliases
                .iter()
                .map(|(a, t)| (a.to_string(), t.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn empty_or_absent_text() {
        assert!(extract_diagnostics("", "python").is_empty());
        assert!(extract_diagnostics(None::<&str>, "cpp").is_empty());
        assert!(extract_diagnostics(None::<&str>, "").is_empty());
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let text = "a.py\nNameError: name 'x' is not defined";
        let lower = extract_diagnostics(text, "python");
        assert_eq!(lower.len(), 1);
        assert_eq!(extract_diagnostics(text, "PYTHON"), lower);
        assert_eq!(extract_diagnostics(text, "Python"), lower);
    }

    #[test]
    fn unknown_tag_uses_generic() {
        let diags = extract_diagnostics("something failed at line 42", "unknown-lang");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 42);
    }

    #[test]
    fn post_filter_applied() {
        let text = "  File \"x.py\", line 0, in <module>\nboom";
        assert!(extract_diagnostics(text, "python").is_empty());
    }

    #[test]
    fn alias_resolution() {
        let engine = ExtractEngine::new(&config(&[("PY", "python"), ("node", "JavaScript")], None));
        assert_eq!(engine.resolve("py"), Language::Python);
        assert_eq!(engine.resolve("Node"), Language::JavaScript);
        assert_eq!(engine.resolve("java"), Language::Java);
        assert_eq!(engine.resolve("ruby"), Language::Generic);
    }

    #[test]
    fn builtin_tags_beat_aliases() {
        let engine = ExtractEngine::new(&config(&[("python", "java")], None));
        assert_eq!(engine.resolve("python"), Language::Python);
    }

    #[test]
    fn alias_to_unknown_target_is_generic() {
        let engine = ExtractEngine::new(&config(&[("rb", "ruby")], None));
        assert_eq!(engine.resolve("rb"), Language::Generic);
    }

    #[test]
    fn engine_without_config_matches_free_function() {
        let engine = ExtractEngine::with_defaults();
        let text = "main.cpp:10:3: error: expected ';' before 'return'";
        assert_eq!(engine.run(text, "cpp"), extract_diagnostics(text, "cpp"));
        assert!(engine.aliases().is_empty());
        assert!(engine.default_language().is_none());
    }

    #[test]
    fn run_or_default_uses_configured_language() {
        let engine = ExtractEngine::new(&config(&[], Some("java")));
        let text = "Main.java:5: error: ';' expected";
        let diags = engine.run_or_default(text, None);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "';' expected");

        // An explicit tag wins over the default.
        let diags = engine.run_or_default(text, Some("python"));
        assert!(diags.is_empty());
    }

    #[test]
    fn aliases_sorted() {
        let engine = ExtractEngine::new(&config(&[("ts", "typescript"), ("cc", "cpp")], None));
        assert_eq!(
            engine.aliases(),
            vec![("cc", Language::Cpp), ("ts", Language::JavaScript)]
        );
    }
}
