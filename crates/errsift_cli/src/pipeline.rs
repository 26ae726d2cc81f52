//! Shared helpers for CLI commands.
//!
//! Configuration discovery, input reading, language selection, and the
//! final rendering step used by both `extract` and `report`.

use std::io::Read;
use std::path::{Path, PathBuf};

use errsift_config::{OutputFormat, SiftConfig};
use errsift_diagnostics::{Diagnostic, DiagnosticRenderer, Severity, SourceFile, TerminalRenderer};
use errsift_extract::ExtractEngine;
use serde::Serialize;

use crate::{GlobalArgs, ReportFormat};

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Diagnostics extracted from one input.
#[derive(Debug, Serialize)]
pub struct InputDiagnostics {
    /// The input file path, or `<stdin>`.
    pub input: String,
    /// The language whose extractor handled the input.
    pub language: String,
    /// Extracted diagnostics in encounter order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Loads the configuration selected by `--config`, or discovered from the
/// current directory. Falls back to defaults when there is none.
pub fn load_settings(global: &GlobalArgs) -> Result<SiftConfig, Box<dyn std::error::Error>> {
    let path = match global.config {
        Some(ref config_path) => Some(PathBuf::from(config_path)),
        None => errsift_config::find_config_file(&std::env::current_dir()?),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            Ok(errsift_config::load_config(&path)?)
        }
        None => Ok(SiftConfig::default()),
    }
}

/// Picks the language tag: explicit flag first, then the source file extension.
///
/// Returns `None` when neither is available, leaving the engine's default
/// language (or the generic extractor) to apply.
pub fn select_language(explicit: Option<&str>, source: Option<&Path>) -> Option<String> {
    if let Some(tag) = explicit {
        return Some(tag.to_string());
    }
    let ext = source?.extension()?.to_str()?;
    errsift_extract::Language::tag_for_extension(ext).map(str::to_string)
}

/// Returns the tag the engine will actually dispatch on.
pub fn effective_tag<'a>(engine: &'a ExtractEngine, language: Option<&'a str>) -> &'a str {
    language.or(engine.default_language()).unwrap_or("")
}

/// Reads captured output from `path`, or from stdin when `path` is `None`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(path: Option<&Path>) -> Result<String, String> {
    let bytes = match path {
        Some(path) => std::fs::read(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("failed to read {STDIN_NAME}: {e}"))?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads the source file the diagnostics refer to, if one was given.
pub fn load_source(path: Option<&Path>) -> Result<Option<SourceFile>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = read_input(Some(path))?;
    Ok(Some(SourceFile::new(path, content)))
}

/// Resolves the output format: CLI flag over configuration.
pub fn resolve_format(flag: Option<ReportFormat>, config: &SiftConfig) -> ReportFormat {
    flag.unwrap_or(match config.output.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::Json,
    })
}

/// Prints the results and returns the process exit code.
///
/// Exit code 1 means at least one error-severity diagnostic was found.
pub fn emit(
    results: &[InputDiagnostics],
    source: Option<&SourceFile>,
    format: ReportFormat,
    config: &SiftConfig,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color, config.output.context);
            let multiple = results.len() > 1;
            for result in results {
                if multiple && !global.quiet && !result.diagnostics.is_empty() {
                    eprintln!("==> {} ({}) <==", result.input, result.language);
                }
                for diag in &result.diagnostics {
                    eprintln!("{}", renderer.render(diag, source));
                }
            }
        }
        ReportFormat::Json => println!("{}", render_json(results)?),
    }

    let (errors, warnings) = count_severities(results);
    if !global.quiet && format == ReportFormat::Text {
        eprintln!("   Result: {errors} error(s), {warnings} warning(s)");
    }

    Ok(if errors > 0 { 1 } else { 0 })
}

/// Serializes results as JSON.
///
/// A single input prints the bare diagnostic array editors consume;
/// several inputs print one object per input.
pub fn render_json(results: &[InputDiagnostics]) -> Result<String, serde_json::Error> {
    match results {
        [single] => serde_json::to_string_pretty(&single.diagnostics),
        _ => serde_json::to_string_pretty(results),
    }
}

/// Counts error- and warning-severity diagnostics across all inputs.
pub fn count_severities(results: &[InputDiagnostics]) -> (usize, usize) {
    results
        .iter()
        .flat_map(|r| &r.diagnostics)
        .fold((0, 0), |(errors, warnings), diag| match diag.severity {
            Severity::Error => (errors + 1, warnings),
            Severity::Warning => (errors, warnings + 1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn global_with_config(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config,
        }
    }

    fn result(input: &str, diagnostics: Vec<Diagnostic>) -> InputDiagnostics {
        InputDiagnostics {
            input: input.to_string(),
            language: "cpp".to_string(),
            diagnostics,
        }
    }

    #[test]
    fn explicit_language_wins() {
        let tag = select_language(Some("java"), Some(Path::new("main.py")));
        assert_eq!(tag.as_deref(), Some("java"));
    }

    #[test]
    fn language_from_source_extension() {
        assert_eq!(
            select_language(None, Some(Path::new("src/app.tsx"))).as_deref(),
            Some("typescript")
        );
        assert_eq!(select_language(None, Some(Path::new("Makefile"))), None);
        assert_eq!(select_language(None, None), None);
    }

    #[test]
    fn effective_tag_falls_back_to_default() {
        let config: SiftConfig =
            toml_config("[extract]\ndefault_language = \"python\"\n");
        let engine = ExtractEngine::new(&config.extract);
        assert_eq!(effective_tag(&engine, None), "python");
        assert_eq!(effective_tag(&engine, Some("cpp")), "cpp");
        assert_eq!(effective_tag(&ExtractEngine::with_defaults(), None), "");
    }

    fn toml_config(content: &str) -> SiftConfig {
        errsift_config::load_config_from_str(content).unwrap()
    }

    #[test]
    fn read_input_lossy() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.log");
        fs::write(&path, b"main.c:1:1: error: bad \xff byte\n").unwrap();
        let text = read_input(Some(&path)).unwrap();
        assert!(text.starts_with("main.c:1:1: error: bad "));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/out.log"))).unwrap_err();
        assert!(err.starts_with("failed to read /nonexistent/out.log"));
    }

    #[test]
    fn load_settings_from_flag() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
        let config =
            load_settings(&global_with_config(Some(path.display().to_string()))).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn load_settings_missing_flag_file_errors() {
        let global = global_with_config(Some("/nonexistent/errsift.toml".to_string()));
        assert!(load_settings(&global).is_err());
    }

    #[test]
    fn format_flag_overrides_config() {
        let config = toml_config("[output]\nformat = \"json\"\n");
        assert_eq!(resolve_format(None, &config), ReportFormat::Json);
        assert_eq!(
            resolve_format(Some(ReportFormat::Text), &config),
            ReportFormat::Text
        );
    }

    #[test]
    fn json_single_input_is_bare_array() {
        let results = vec![result("<stdin>", vec![Diagnostic::error(3, "boom")])];
        let json: serde_json::Value = serde_json::from_str(&render_json(&results).unwrap()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["line"], 3);
        assert_eq!(json[0]["endColumn"], 1000);
    }

    #[test]
    fn json_multiple_inputs_are_tagged() {
        let results = vec![
            result("a.log", vec![Diagnostic::error(1, "a")]),
            result("b.log", Vec::new()),
        ];
        let json: serde_json::Value = serde_json::from_str(&render_json(&results).unwrap()).unwrap();
        assert_eq!(json[0]["input"], "a.log");
        assert_eq!(json[0]["language"], "cpp");
        assert_eq!(json[1]["diagnostics"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn severity_counts() {
        let results = vec![
            result("a.log", vec![Diagnostic::error(1, "a"), Diagnostic::warning(2, "b")]),
            result("b.log", vec![Diagnostic::error(5, "c")]),
        ];
        assert_eq!(count_severities(&results), (2, 1));
    }

    #[test]
    fn exit_code_reflects_errors() {
        let config = SiftConfig::default();
        let global = global_with_config(None);
        let warnings_only = vec![result("a", vec![Diagnostic::warning(2, "w")])];
        let with_error = vec![result("a", vec![Diagnostic::error(2, "e")])];
        assert_eq!(
            emit(&warnings_only, None, ReportFormat::Text, &config, &global).unwrap(),
            0
        );
        assert_eq!(
            emit(&with_error, None, ReportFormat::Text, &config, &global).unwrap(),
            1
        );
    }
}
