//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert a `CliError` into a miette report for display from `main`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // Library errors already implement `Diagnostic`.
        CliError::Extract(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::BatchFailed { failed, total } => miette::miette!(
            help = "rerun with --verbose for per-file details",
            "{} of {} files failed",
            failed,
            total
        ),
        other => miette::miette!("{}", other),
    }
}
