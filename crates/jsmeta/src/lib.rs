#![deny(clippy::all)]
// jsmeta reads source files with std::fs
#![allow(clippy::disallowed_methods)]

//! Structural metadata extraction for JavaScript / TypeScript modules.
//!
//! This crate provides:
//! - A metadata model describing a file's imports, exports, classes and
//!   top-level functions.
//! - An extractor that walks an OXC syntax tree once and builds that model.
//! - Renderers for the `SourceFile` XML document and a JSON equivalent.
//!
//! ```rust
//! use jsmeta::{serialize, MetadataExtractor};
//!
//! let source = r#"import { useFoo as foo } from "./foo";"#;
//! let metadata = MetadataExtractor::default()
//!     .extract_from_source("widget.js", source)
//!     .unwrap();
//! let xml = serialize(&metadata, "widget.js");
//! assert!(xml.contains(r#"<Specifier type="named" imported="useFoo" local="foo" />"#));
//! ```

pub mod error;
pub mod extractor;
pub mod generators;
pub mod model;
pub mod parse;

use std::path::{Path, PathBuf};

pub use error::{ConstructKind, JsmetaError, Result};
pub use extractor::{ExtractOptions, MetadataExtractor};
pub use generators::OutputFormat;
pub use generators::xml::{escape_xml, render_xml};
pub use model::{
    ApexTarget, ClassRecord, ExportKind, ExportRecord, FileMetadata, FunctionRecord, ImportRecord,
    MethodKind, MethodRecord, PropertyRecord, Specifier,
};

#[cfg(feature = "json")]
pub use generators::json::render_json;

/// Default suffix appended to file stems when naming output documents.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_ast";

/// Render the `SourceFile` XML document for `metadata`.
pub fn serialize(metadata: &FileMetadata, file_label: &str) -> String {
    render_xml(metadata, file_label)
}

/// Label written as the document's root `name`: the input's file name.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Output file name for `input`: `<stem><suffix>.<ext>`.
///
/// `widget.js` with the default suffix becomes `widget_ast.xml`.
pub fn output_file_name(input: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}{suffix}.{}", format.extension()))
}
