//! Batch command implementation.
//!
//! Walks a directory tree, analyzes every file whose extension is configured,
//! and writes one document per file under the output directory, mirroring the
//! file's relative location. Files are independent, so they are processed in
//! parallel on the rayon pool.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use jsmeta::{file_label, output_file_name, MetadataExtractor};
use rayon::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::cli::BatchArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, JsmetaConfig};
use crate::error::{CliError, Result};
use crate::ui;

/// Result of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Document written.
    Analyzed,
    /// Extraction or writing failed.
    Failed(String),
    /// Not attempted because an earlier file failed under `failFast`.
    Skipped,
}

/// Totals for a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub analyzed: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub skipped: usize,
}

impl BatchReport {
    /// Files that were attempted.
    pub fn total(&self) -> usize {
        self.analyzed + self.failures.len()
    }
}

/// Execute the batch command.
///
/// Fails with [`CliError::BatchFailed`] when any file failed; the summary is
/// printed either way.
pub fn execute(args: BatchArgs, config_path: Option<&Path>) -> Result<()> {
    let config = JsmetaConfig::load(&ConfigOverrides::from(&args), config_path)?;

    if !args.input_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "not a directory: {}",
            args.input_dir.display()
        )));
    }

    let sources = collect_sources(&args.input_dir, &config)?;
    if sources.is_empty() {
        ui::warning(&format!(
            "No files with extensions [{}] under {}",
            config.extensions.join(", "),
            args.input_dir.display()
        ));
    } else {
        ui::info(&format!(
            "Analyzing {} files under {}",
            sources.len(),
            args.input_dir.display()
        ));
    }

    let start = Instant::now();
    let report = run_batch(&sources, &args.input_dir, &args.out_dir, &config);

    ui::print_batch_summary(
        report.total(),
        report.analyzed,
        &report.failures,
        start.elapsed(),
    );
    if report.skipped > 0 {
        ui::warning(&format!(
            "Skipped {} files after the first failure (failFast)",
            report.skipped
        ));
    }

    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::BatchFailed {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}

/// Every file under `root` with a configured extension, in file-name order.
pub fn collect_sources(root: &Path, config: &JsmetaConfig) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.matches_extension(ext));
        if matches {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

/// Analyze `sources` in parallel and collect the per-file outcomes in input order.
///
/// Sources whose documents would land on the same output path (`widget.js`
/// and `widget.mjs` in one directory) all fail without being analyzed.
pub fn run_batch(
    sources: &[PathBuf],
    input_dir: &Path,
    out_dir: &Path,
    config: &JsmetaConfig,
) -> BatchReport {
    let extractor = MetadataExtractor::new(config.extract_options());
    let stop = AtomicBool::new(false);

    let targets: Vec<PathBuf> = sources
        .iter()
        .map(|source| output_path(source, input_dir, out_dir, config))
        .collect();
    let mut claims: HashMap<&Path, Vec<&Path>> = HashMap::new();
    for (source, target) in sources.iter().zip(&targets) {
        claims.entry(target.as_path()).or_default().push(source.as_path());
    }

    let outcomes: Vec<FileOutcome> = sources
        .par_iter()
        .zip(targets.par_iter())
        .map(|(source, target)| {
            if stop.load(Ordering::Relaxed) {
                return FileOutcome::Skipped;
            }
            let result = match claims.get(target.as_path()) {
                Some(claimants) if claimants.len() > 1 => Err(output_conflict(target, claimants)),
                _ => process_file(&extractor, source, target, config),
            };
            match result {
                Ok(()) => {
                    info!(source = %source.display(), output = %target.display(), "wrote metadata document");
                    FileOutcome::Analyzed
                }
                Err(err) => {
                    warn!(source = %source.display(), "analysis failed: {err}");
                    if config.fail_fast {
                        stop.store(true, Ordering::Relaxed);
                    }
                    FileOutcome::Failed(err.to_string())
                }
            }
        })
        .collect();

    let mut report = BatchReport::default();
    for (source, outcome) in sources.iter().zip(outcomes) {
        match outcome {
            FileOutcome::Analyzed => report.analyzed += 1,
            FileOutcome::Failed(reason) => report.failures.push((source.clone(), reason)),
            FileOutcome::Skipped => report.skipped += 1,
        }
    }
    report
}

fn output_conflict(target: &Path, claimants: &[&Path]) -> CliError {
    CliError::OutputConflict {
        output: target.to_path_buf(),
        sources: claimants.iter().map(|source| file_label(source)).collect(),
    }
}

fn process_file(
    extractor: &MetadataExtractor,
    source: &Path,
    output: &Path,
    config: &JsmetaConfig,
) -> Result<()> {
    let metadata = extractor.extract_from_path(source)?;
    utils::write_document(output, &metadata, &file_label(source), config.format)
}

/// `out_dir/<relative dir>/<stem><suffix>.<ext>` for a file under `input_dir`.
pub fn output_path(
    source: &Path,
    input_dir: &Path,
    out_dir: &Path,
    config: &JsmetaConfig,
) -> PathBuf {
    let file_name = output_file_name(source, &config.output_suffix, config.format);
    let relative_dir = source
        .strip_prefix(input_dir)
        .ok()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    out_dir.join(relative_dir).join(file_name)
}
