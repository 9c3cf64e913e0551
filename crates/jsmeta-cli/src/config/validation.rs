use crate::config::JsmetaConfig;
use crate::error::{ConfigError, Result};

fn has_path_separator(value: &str) -> bool {
    value.contains(['/', '\\'])
}

impl JsmetaConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one file extension, e.g. [\"js\"]".to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') || has_path_separator(ext) {
                return Err(ConfigError::InvalidValue {
                    field: "extensions".to_string(),
                    value: ext.clone(),
                    hint: "Write bare extensions without dots or slashes, e.g. \"js\"".to_string(),
                }
                .into());
            }
        }

        if has_path_separator(&self.output_suffix) {
            return Err(ConfigError::InvalidValue {
                field: "outputSuffix".to_string(),
                value: self.output_suffix.clone(),
                hint: "The suffix is appended to a file name and cannot contain path separators"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}
