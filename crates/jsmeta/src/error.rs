use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for metadata extraction.
pub type Result<T> = std::result::Result<T, JsmetaError>;

/// Error variants for reading, parsing and extracting a source file.
#[derive(Debug, Error, Diagnostic)]
pub enum JsmetaError {
    /// The designated input file does not exist.
    #[error("input file not found: {}", .path.display())]
    #[diagnostic(
        code(jsmeta::input_not_found),
        help("check the input path; nothing was written")
    )]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Failed to read an existing source file.
    #[error("failed to read source '{}': {error}", .path.display())]
    #[diagnostic(code(jsmeta::io))]
    Io {
        /// Path to the source file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// OXC reported syntax errors for the source file.
    #[error("failed to parse source '{}': {message}", .path.display())]
    #[diagnostic(code(jsmeta::parse))]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser diagnostics.
        message: String,
    },

    /// A recognized construct is missing a field the metadata model requires.
    #[error(
        "cannot extract {kind} at {}:{line}:{column}: {reason}",
        .path.display()
    )]
    #[diagnostic(code(jsmeta::extraction))]
    Extraction {
        /// Construct kind that failed.
        kind: ConstructKind,
        /// Path (or virtual path) of the source file.
        path: PathBuf,
        /// One-based line of the construct.
        line: u32,
        /// One-based column of the construct.
        column: u32,
        /// What was missing.
        reason: String,
    },

    /// A renderer failed to produce its document.
    #[error("failed to render document: {message}")]
    #[diagnostic(code(jsmeta::render))]
    Render {
        /// Human-readable error message.
        message: String,
    },
}

impl JsmetaError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Returns `true` for the missing-input case.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

/// Syntax constructs the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    ExportNamedDeclaration,
    ClassDeclaration,
    FunctionDeclaration,
}

impl ConstructKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExportNamedDeclaration => "ExportNamedDeclaration",
            Self::ClassDeclaration => "ClassDeclaration",
            Self::FunctionDeclaration => "FunctionDeclaration",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
