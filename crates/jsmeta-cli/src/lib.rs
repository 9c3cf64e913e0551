#![deny(clippy::all)]
// The CLI reads and writes documents with std::fs
#![allow(clippy::disallowed_methods)]

//! jsmeta CLI - summarize JavaScript modules as metadata documents.
//!
//! The binary wraps the `jsmeta` library:
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `analyze` (one file) and `batch` (a directory tree)
//! - [`config`] - layered configuration (defaults, file, environment, flags)
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines
//!
//! # Example
//!
//! ```rust,no_run
//! use jsmeta_cli::cli::AnalyzeArgs;
//! use jsmeta_cli::commands::analyze_execute;
//!
//! let args = AnalyzeArgs {
//!     input: "force-app/lwc/widget/widget.js".into(),
//!     output: "out/widget_ast.xml".into(),
//!     format: None,
//!     allow_parse_errors: false,
//! };
//! analyze_execute(args, None).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
