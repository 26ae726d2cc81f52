//! `errsift languages`: list the built-in grammars and configured aliases.

use errsift_extract::{builtin_extractors, ExtractEngine, GrammarExtractor};

use crate::pipeline::load_settings;
use crate::GlobalArgs;

/// Runs the `errsift languages` command. Always succeeds with exit code 0.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let engine = ExtractEngine::new(&config.extract);
    print!("{}", listing(&engine));
    Ok(0)
}

fn listing(engine: &ExtractEngine) -> String {
    let mut out = String::new();
    for extractor in builtin_extractors() {
        out.push_str(&extractor_line(extractor));
        out.push('\n');
    }

    let aliases = engine.aliases();
    if !aliases.is_empty() {
        out.push_str("\naliases:\n");
        for (alias, language) in aliases {
            out.push_str(&format!("  {alias} -> {language}\n"));
        }
    }
    if let Some(default) = engine.default_language() {
        out.push_str(&format!("\ndefault: {default}\n"));
    }
    out
}

fn extractor_line(extractor: &dyn GrammarExtractor) -> String {
    let tags = extractor.language().tags();
    let tags = if tags.is_empty() {
        "(fallback)".to_string()
    } else {
        tags.join(", ")
    };
    format!(
        "{:<18} {:<28} {}",
        extractor.name(),
        tags,
        extractor.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use errsift_config::ExtractConfig;

    #[test]
    fn lists_every_extractor() {
        let text = listing(&ExtractEngine::with_defaults());
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("c-compiler"));
        assert!(text.contains("cpp, c++, c"));
        assert!(text.contains("(fallback)"));
        assert!(!text.contains("aliases:"));
        assert!(!text.contains("default:"));
    }

    #[test]
    fn lists_aliases_and_default() {
        let mut config = ExtractConfig::default();
        config.aliases.insert("node".to_string(), "javascript".to_string());
        config.default_language = Some("python".to_string());
        let text = listing(&ExtractEngine::new(&config));
        assert!(text.contains("  node -> javascript\n"));
        assert!(text.ends_with("default: python\n"));
    }
}
