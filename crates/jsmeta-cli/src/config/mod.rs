//! Configuration for the jsmeta CLI with multi-source loading.
//!
//! Priority: CLI flags > `JSMETA_*` environment > config file > defaults.

mod defaults;
mod loading;
mod validation;

use jsmeta::{ExtractOptions, OutputFormat};
use serde::{Deserialize, Serialize};

pub use defaults::*;
pub use loading::{ConfigOverrides, DEFAULT_CONFIG_FILE};

/// jsmeta configuration - loaded from jsmeta.config.json, the environment and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsmetaConfig {
    /// Output document format (xml, json)
    #[serde(default)]
    pub format: OutputFormat,

    /// File extensions picked up by `batch`, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Suffix appended to file stems by `batch`
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Stop `batch` at the first failing file
    #[serde(default)]
    pub fail_fast: bool,

    /// Extract from the recovered tree when the parser reports errors
    #[serde(default)]
    pub allow_parse_errors: bool,
}

impl Default for JsmetaConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            extensions: default_extensions(),
            output_suffix: default_output_suffix(),
            fail_fast: false,
            allow_parse_errors: false,
        }
    }
}

impl JsmetaConfig {
    /// Extraction options derived from this configuration.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            allow_parse_errors: self.allow_parse_errors,
        }
    }

    /// Whether `batch` should analyze a file with this extension.
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
