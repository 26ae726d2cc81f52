//! `errsift extract`: diagnostics from raw captured output.
//!
//! Each input file is read and extracted independently (in parallel when
//! there are several); stdin is used when no inputs are given.

use std::path::PathBuf;

use errsift_extract::ExtractEngine;
use rayon::prelude::*;

use crate::pipeline::{
    effective_tag, emit, load_settings, load_source, read_input, resolve_format,
    select_language, InputDiagnostics, STDIN_NAME,
};
use crate::{ExtractArgs, GlobalArgs};

/// Runs the `errsift extract` command.
///
/// Returns exit code 0 if no error-severity diagnostics were found, 1 otherwise.
pub fn run(args: &ExtractArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let engine = ExtractEngine::new(&config.extract);

    let language = select_language(args.language.as_deref(), args.source.as_deref());
    let tag = effective_tag(&engine, language.as_deref());
    let source = load_source(args.source.as_deref())?;

    let results = if args.inputs.is_empty() {
        vec![extract_input(&engine, None, tag)?]
    } else {
        extract_files(&engine, &args.inputs, tag)?
    };

    emit(&results, source.as_ref(), resolve_format(args.format, &config), &config, global)
}

/// Extracts every file in parallel, keeping input order.
fn extract_files(
    engine: &ExtractEngine,
    inputs: &[PathBuf],
    tag: &str,
) -> Result<Vec<InputDiagnostics>, String> {
    inputs
        .par_iter()
        .map(|path| extract_input(engine, Some(path), tag))
        .collect()
}

fn extract_input(
    engine: &ExtractEngine,
    path: Option<&PathBuf>,
    tag: &str,
) -> Result<InputDiagnostics, String> {
    let text = read_input(path.map(PathBuf::as_path))?;
    let input = path.map_or_else(|| STDIN_NAME.to_string(), |p| p.display().to_string());
    tracing::debug!(input = %input, tag, "extracting");
    Ok(InputDiagnostics {
        input,
        language: engine.resolve(tag).name().to_string(),
        diagnostics: engine.run(text.as_str(), tag),
    })
}
