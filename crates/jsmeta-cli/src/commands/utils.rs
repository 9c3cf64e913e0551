//! Shared helpers for command implementations.

use std::fs;
use std::path::Path;

use jsmeta::{FileMetadata, OutputFormat};

use crate::error::{Result, ResultExt};

/// Render `metadata` and write it to `output`, creating parent directories.
pub fn write_document(
    output: &Path,
    metadata: &FileMetadata,
    file_label: &str,
    format: OutputFormat,
) -> Result<()> {
    let document = format.render(metadata, file_label)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(output, document).with_path(output)?;
    Ok(())
}
