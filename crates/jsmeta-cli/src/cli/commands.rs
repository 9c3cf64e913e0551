use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::FormatArg;

/// Available jsmeta subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one source file and write its metadata document
    ///
    /// Nothing is written when the input is missing or extraction fails.
    Analyze(AnalyzeArgs),

    /// Analyze every matching file under a directory
    ///
    /// Files are processed in parallel. Each document is written under
    /// --out-dir at the file's relative directory as <stem><suffix>.<ext>.
    Batch(BatchArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Source file to analyze
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination of the metadata document
    ///
    /// Parent directories are created as needed.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output document format [default: xml]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// Extract from the recovered tree when the parser reports errors
    #[arg(long)]
    pub allow_parse_errors: bool,
}

/// Arguments for the batch command
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Directory to scan for source files
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory receiving the metadata documents
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Output document format [default: xml]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// File extensions to analyze, without the leading dot
    ///
    /// Example: --ext js --ext ts
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Suffix appended to each file stem [default: _ast]
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Extract from the recovered tree when the parser reports errors
    #[arg(long)]
    pub allow_parse_errors: bool,
}
