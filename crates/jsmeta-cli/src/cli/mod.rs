//! Command-line interface definition for jsmeta.
//!
//! - `jsmeta analyze <INPUT> <OUTPUT>` - one source file in, one document out
//! - `jsmeta batch <DIR> --out-dir <DIR>` - every matching file under a tree

mod commands;
pub mod enums;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{AnalyzeArgs, BatchArgs, Command};
pub use enums::FormatArg;

/// jsmeta - structural metadata for JavaScript modules
#[derive(Parser, Debug)]
#[command(
    name = "jsmeta",
    version,
    about = "Summarize JavaScript modules as XML or JSON metadata documents",
    long_about = "jsmeta parses JavaScript and TypeScript modules and writes a compact document\n\
                  listing each file's imports, exports, classes (with members) and top-level\n\
                  functions. Lightning Web Components bundles are the primary use case."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a jsmeta.config.json file
    ///
    /// Defaults to ./jsmeta.config.json when that file exists.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
