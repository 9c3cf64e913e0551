//! Analyze command implementation.

use std::path::Path;

use jsmeta::{file_label, MetadataExtractor};
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, JsmetaConfig};
use crate::error::Result;
use crate::ui;

/// Execute the analyze command.
///
/// 1. Load configuration (file, environment, flags)
/// 2. Extract metadata from `args.input`
/// 3. Render and write the document to `args.output`
///
/// A missing input fails with `InputNotFound` before anything is written.
pub fn execute(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = JsmetaConfig::load(&ConfigOverrides::from(&args), config_path)?;
    let extractor = MetadataExtractor::new(config.extract_options());

    let metadata = extractor.extract_from_path(&args.input)?;
    utils::write_document(
        &args.output,
        &metadata,
        &file_label(&args.input),
        config.format,
    )?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "wrote metadata document"
    );
    ui::success(&format!(
        "Analyzed {} -> {}",
        args.input.display(),
        args.output.display()
    ));
    Ok(())
}
