//! jsmeta CLI - structural metadata documents for JavaScript modules.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations.

use clap::Parser;
use jsmeta_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze_execute(analyze_args, config_path),
        cli::Command::Batch(batch_args) => commands::batch_execute(batch_args, config_path),
    };

    result.map_err(error::cli_error_to_miette)
}
