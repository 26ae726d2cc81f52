//! `errsift report`: diagnostics from a JSON execution report.

use std::path::Path;

use errsift_extract::{ExecutionReport, ExtractEngine};

use crate::pipeline::{
    effective_tag, emit, load_settings, load_source, read_input, resolve_format,
    select_language, InputDiagnostics,
};
use crate::{GlobalArgs, ReportArgs};

/// Runs the `errsift report` command.
pub fn run(args: &ReportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let engine = ExtractEngine::new(&config.extract);

    let language = select_language(args.language.as_deref(), args.source.as_deref());
    let tag = effective_tag(&engine, language.as_deref());
    let source = load_source(args.source.as_deref())?;

    let report = read_report(&args.report)?;
    if !global.quiet && report.success {
        eprintln!("   Run succeeded");
    }

    let results = vec![InputDiagnostics {
        input: args.report.display().to_string(),
        language: engine.resolve(tag).name().to_string(),
        diagnostics: engine.run_report(&report, tag),
    }];

    emit(&results, source.as_ref(), resolve_format(args.format, &config), &config, global)
}

/// Reads and deserializes an execution report.
fn read_report(path: &Path) -> Result<ExecutionReport, String> {
    let text = read_input(Some(path))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid report {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_report_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("result.json");
        fs::write(
            &path,
            r#"{"success": false, "stdout": "", "stderr": "Main.java:3: error: ';' expected", "error": "Compilation failed"}"#,
        )
        .unwrap();

        let report = read_report(&path).unwrap();
        assert!(!report.success);
        let diags = ExtractEngine::with_defaults().run_report(&report, "java");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn malformed_report_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("result.json");
        fs::write(&path, "not json").unwrap();
        let err = read_report(&path).unwrap_err();
        assert!(err.starts_with("invalid report"));
    }
}
