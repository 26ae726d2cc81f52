//! Conformance test helpers for errsift.
//!
//! Holds captured output from real toolchains and thin wrappers that run it
//! through the extraction engine and summarize the result for assertions
//! in the integration tests.

#![warn(missing_docs)]

use errsift_config::SiftConfig;
use errsift_diagnostics::{Diagnostic, Severity};
use errsift_extract::{ExecutionReport, ExtractEngine};

/// GCC output for an undeclared identifier plus an unused-variable warning.
pub const GCC_UNDECLARED: &str = "\
main.cpp: In function 'int main()':
main.cpp:5:5: error: 'cout' was not declared in this scope
    5 |     cout << \"hi\";
      |     ^~~~
main.cpp:5:5: note: suggested alternative: 'std::cout'
main.cpp:3:9: warning: unused variable 'x' [-Wunused-variable]
";

/// Clang output for a missing semicolon.
pub const CLANG_MISSING_SEMI: &str = "\
main.cpp:10:3: error: expected ';' after expression
  foo()
       ^
       ;
1 error generated.
";

/// Parenthesized `file(line,col)` locations, as printed by clang-cl.
pub const PAREN_STYLE: &str = "\
C:\\src\\main.cpp(12,7): error: use of undeclared identifier 'y'
C:\\src\\main.cpp(20,1): warning: unused function 'helper'
";

/// `javac` output with one error and one warning.
pub const JAVAC_OUTPUT: &str = "\
Main.java:5: error: ';' expected
        int x = 5
                 ^
Main.java:9: warning: [deprecation] Date(String) in Date has been deprecated
1 error
1 warning
";

/// A Node.js uncaught `ReferenceError`.
pub const NODE_REFERENCE_ERROR: &str = "\
/app/main.js:3
    console.log(x);
                ^

ReferenceError: x is not defined
    at Object.<anonymous> (/app/main.js:3:17)
    at Module._compile (node:internal/modules/cjs/loader:1256:14)
";

/// `tsc --pretty false` style output.
pub const TSC_OUTPUT: &str =
    "src/app.ts:4:7 - error TS2322: Type 'string' is not assignable to type 'number'.\n";

/// A CPython `SyntaxError` report, whose frame has no function name.
pub const PYTHON_SYNTAX_ERROR: &str = "\
  File \"/tmp/main.py\", line 2
    print(\"hi\"
         ^
SyntaxError: '(' was never closed
";

/// A CPython traceback ending in `NameError`.
pub const PYTHON_NAME_ERROR: &str = "\
Traceback (most recent call last):
  File \"/tmp/main.py\", line 7, in <module>
    greet(nme)
NameError: name 'nme' is not defined
";

/// A two-frame CPython traceback ending in `ZeroDivisionError`.
pub const PYTHON_NESTED_TRACEBACK: &str = "\
Traceback (most recent call last):
  File \"/tmp/main.py\", line 10, in <module>
    main()
  File \"/tmp/main.py\", line 6, in main
    return 1 / 0
           ~~^~~
ZeroDivisionError: division by zero
";

/// A Ruby error, for which there is no dedicated grammar.
pub const RUBY_NAME_ERROR: &str =
    "main.rb:3:in `<main>': undefined local variable or method `x' for main:Object (NameError)\n";

/// Outcome of one extraction run.
pub struct ExtractionResult {
    /// Diagnostics in encounter order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl ExtractionResult {
    fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics.len() - error_count;
        Self {
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Returns the line numbers of all diagnostics, in order.
    pub fn lines(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.line).collect()
    }
}

/// Extracts `text` with the default engine.
pub fn extract(text: &str, tag: &str) -> ExtractionResult {
    ExtractionResult::new(errsift_extract::extract_diagnostics(text, tag))
}

/// Parses `config_toml` as an `errsift.toml` and extracts `text` with the
/// engine it configures. `tag` of `None` uses the configured default.
pub fn extract_with_config(config_toml: &str, text: &str, tag: Option<&str>) -> ExtractionResult {
    let config: SiftConfig =
        errsift_config::load_config_from_str(config_toml).expect("conformance config is valid");
    let engine = ExtractEngine::new(&config.extract);
    ExtractionResult::new(engine.run_or_default(text, tag))
}

/// Builds a failed execution report.
pub fn failed_report(stderr: &str, error: Option<&str>) -> ExecutionReport {
    ExecutionReport {
        success: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
        error: error.map(str::to_string),
    }
}

/// Extracts an execution report with the default engine.
pub fn extract_report(report: &ExecutionReport, tag: &str) -> ExtractionResult {
    ExtractionResult::new(errsift_extract::extract_from_report(report, tag))
}
