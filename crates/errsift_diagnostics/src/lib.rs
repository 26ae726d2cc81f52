//! Positioned diagnostics extracted from toolchain output, and their rendering.
//!
//! This crate provides the [`Diagnostic`] record shared by every extractor,
//! its [`Severity`], a line-indexed [`SourceFile`] for looking up the code a
//! diagnostic points at, and [`DiagnosticRenderer`] implementations that
//! format diagnostics for the terminal.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod source_file;

pub use diagnostic::{Diagnostic, FULL_LINE_END, SPAN_WIDTH};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use source_file::SourceFile;
