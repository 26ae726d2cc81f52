//! errsift CLI: turn compiler and interpreter output into positioned diagnostics.
//!
//! Provides `errsift extract` for raw stderr text, `errsift report` for JSON
//! execution reports, and `errsift languages` to list the known grammars.

#![warn(missing_docs)]

mod extract;
mod languages;
mod pipeline;
mod report;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// errsift: extract positioned diagnostics from toolchain output.
#[derive(Parser, Debug)]
#[command(name = "errsift", version, about = "Extract diagnostics from compiler output")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `errsift.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract diagnostics from raw output files (or stdin).
    Extract(ExtractArgs),
    /// Extract diagnostics from a JSON execution report.
    Report(ReportArgs),
    /// List the supported languages and configured aliases.
    Languages,
}

/// Arguments for the `errsift extract` subcommand.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Files holding captured output. Reads stdin when none are given.
    pub inputs: Vec<PathBuf>,

    /// Language tag of the program that produced the output (e.g. `python`, `cpp`).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Source file the output refers to; used for context and language inference.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output format for diagnostics (defaults to the configured format).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Arguments for the `errsift report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// JSON file with `success`, `stdout`, `stderr` and `error` fields.
    pub report: PathBuf,

    /// Language tag of the program that was executed.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Source file that was executed; used for context and language inference.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output format for diagnostics (defaults to the configured format).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    init_tracing(&global);

    let result = match cli.command {
        Command::Extract(ref args) => extract::run(args, &global),
        Command::Report(ref args) => report::run(args, &global),
        Command::Languages => languages::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` and `--quiet` pick the level.
fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(global)));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_ansi(global.color),
        )
        .with(filter)
        .init();
}

fn default_log_level(global: &GlobalArgs) -> &'static str {
    if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    }
}
