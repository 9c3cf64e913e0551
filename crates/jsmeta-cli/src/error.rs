//! Error handling for the jsmeta CLI.
//!
//! `CliError` is what every command returns. Library failures arrive as
//! [`jsmeta::JsmetaError`] and keep their miette diagnostic codes when they
//! are reported from `main`.

mod miette;

use std::path::PathBuf;

use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading, parsing or extracting a source file failed.
    #[error(transparent)]
    Extract(#[from] jsmeta::JsmetaError),

    /// Configuration-related errors (unreadable file, invalid values).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing an output document failed.
    #[error("Failed to write {}: {error}", .path.display())]
    Write {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// File or directory not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Walking the batch input tree failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// One or more files in a batch run failed.
    #[error("{failed} of {total} files failed")]
    BatchFailed {
        /// Files that failed.
        failed: usize,
        /// Files that were attempted.
        total: usize,
    },

    /// Several batch sources map to the same output document.
    #[error("output {} would be written by {}", .output.display(), .sources.join(", "))]
    OutputConflict {
        /// Shared output path.
        output: PathBuf,
        /// File names of the colliding sources.
        sources: Vec<String>,
    },

    /// Invalid command-line arguments or options.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}\n\nHint: Create a jsmeta.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Layered configuration could not be extracted.
    #[error("Invalid configuration: {0}\n\nHint: Check jsmeta.config.json syntax and JSMETA_* environment variables")]
    Extract(String),

    /// Invalid value for a configuration option.
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value.
        field: String,
        /// The invalid value.
        value: String,
        /// Helpful hint for correct values.
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Attach a path to the error. A not-found I/O error becomes
    /// [`CliError::FileNotFound`]; other I/O errors become [`CliError::Write`].
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(error) if error.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Io(error) => CliError::Write {
                path: path.as_ref().to_path_buf(),
                error,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_not_found_has_hint() {
        let err = ConfigError::NotFound(PathBuf::from("jsmeta.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("jsmeta.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: ".js".to_string(),
            hint: "Write extensions without the leading dot".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'extensions': .js"));
        assert!(msg.contains("Hint: Write extensions"));
    }

    #[test]
    fn library_errors_are_transparent() {
        let err: CliError = jsmeta::JsmetaError::InputNotFound {
            path: PathBuf::from("missing.js"),
        }
        .into();
        assert_eq!(err.to_string(), "input file not found: missing.js");
    }

    #[test]
    fn batch_failure_counts() {
        let err = CliError::BatchFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 files failed");
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result.with_path("/test/path.js").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn with_path_keeps_other_io_errors_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path("out/widget_ast.xml").unwrap_err();
        match err {
            CliError::Write { path, .. } => assert_eq!(path, PathBuf::from("out/widget_ast.xml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
