//! Engine behavior driven by `errsift.toml` and by execution reports.

use errsift_conformance::{
    extract_report, extract_with_config, failed_report, GCC_UNDECLARED, JAVAC_OUTPUT,
    PYTHON_NAME_ERROR,
};
use errsift_extract::ExecutionReport;

const CONFIG: &str = r#"
[extract]
default_language = "python"

[extract.aliases]
py3 = "python"
cc = "cpp"
kotlin = "java"
"#;

#[test]
fn default_language_applies_without_tag() {
    let result = extract_with_config(CONFIG, PYTHON_NAME_ERROR, None);
    assert_eq!(result.lines(), vec![7, 7]);
}

#[test]
fn aliases_select_builtin_grammars() {
    assert_eq!(extract_with_config(CONFIG, GCC_UNDECLARED, Some("cc")).lines(), vec![5, 3]);
    assert_eq!(extract_with_config(CONFIG, GCC_UNDECLARED, Some("CC")).lines(), vec![5, 3]);
    assert_eq!(extract_with_config(CONFIG, JAVAC_OUTPUT, Some("kotlin")).lines(), vec![5, 9]);
}

#[test]
fn explicit_tag_overrides_default() {
    let result = extract_with_config(CONFIG, PYTHON_NAME_ERROR, Some("cpp"));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn empty_config_behaves_like_free_function() {
    let result = extract_with_config("", GCC_UNDECLARED, Some("cpp"));
    assert_eq!(result.lines(), vec![5, 3]);
    let result = extract_with_config("", "oops at line 4", None);
    assert_eq!(result.lines(), vec![4]);
}

#[test]
fn compile_failure_report() {
    let report = failed_report(GCC_UNDECLARED, Some("Compilation failed"));
    let result = extract_report(&report, "cpp");
    assert_eq!(result.lines(), vec![5, 3]);
}

#[test]
fn runtime_failure_report() {
    let report = failed_report(PYTHON_NAME_ERROR, None);
    let result = extract_report(&report, "python");
    assert_eq!(result.lines(), vec![7, 7]);
}

#[test]
fn timeout_report_gets_synthetic_diagnostic() {
    let report = failed_report("", Some("Execution timed out"));
    let result = extract_report(&report, "python");
    assert_eq!(result.lines(), vec![1]);
    assert_eq!(result.diagnostics[0].message, "Execution timed out");
    assert_eq!(result.error_count, 1);
}

#[test]
fn successful_report_is_clean() {
    let json = r#"{"success": true, "stdout": "42\n", "stderr": "", "error": null}"#;
    let report: ExecutionReport = serde_json::from_str(json).unwrap();
    assert!(extract_report(&report, "python").diagnostics.is_empty());
}

#[test]
fn report_json_wire_shape() {
    let report = failed_report("main.cpp:10:3: error: expected ';'", None);
    let result = extract_report(&report, "cpp");
    let json = serde_json::to_value(&result.diagnostics).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "line": 10,
            "column": 3,
            "endColumn": 8,
            "message": "expected ';'",
            "severity": "error"
        }])
    );
}
