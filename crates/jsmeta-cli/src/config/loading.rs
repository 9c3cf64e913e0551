use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use jsmeta::OutputFormat;
use serde::Serialize;

use crate::cli::{AnalyzeArgs, BatchArgs};
use crate::config::JsmetaConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "jsmeta.config.json";

const ENV_PREFIX: &str = "JSMETA_";

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_parse_errors: Option<bool>,
}

impl From<&AnalyzeArgs> for ConfigOverrides {
    fn from(args: &AnalyzeArgs) -> Self {
        Self {
            format: args.format.map(Into::into),
            allow_parse_errors: args.allow_parse_errors.then_some(true),
            ..Self::default()
        }
    }
}

impl From<&BatchArgs> for ConfigOverrides {
    fn from(args: &BatchArgs) -> Self {
        Self {
            format: args.format.map(Into::into),
            extensions: (!args.extensions.is_empty()).then(|| args.extensions.clone()),
            output_suffix: args.suffix.clone(),
            fail_fast: args.fail_fast.then_some(true),
            allow_parse_errors: args.allow_parse_errors.then_some(true),
        }
    }
}

impl JsmetaConfig {
    /// Load configuration from every source and validate the result.
    ///
    /// An explicit `config_path` must exist. Without one,
    /// `./jsmeta.config.json` is used when present.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let config_file = resolve_config_file(config_path)?;
        let config = Self::figment(overrides, config_file.as_deref())
            .extract::<Self>()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;

        config.validate()?;
        tracing::debug!(?config, file = ?config_file, "loaded configuration");
        Ok(config)
    }

    /// Layered provider: defaults, file, environment, then CLI overrides.
    pub(crate) fn figment(overrides: &ConfigOverrides, config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // JSMETA_OUTPUT_SUFFIX -> outputSuffix. Env lowercases emitted keys unless told not to.
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| camel_case(key.as_str()).into())
                .lowercase(false),
        );

        figment.merge(Serialized::defaults(overrides))
    }
}

fn resolve_config_file(config_path: Option<&Path>) -> Result<Option<PathBuf>> {
    match config_path {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            Ok(default_path.is_file().then(|| default_path.to_path_buf()))
        }
    }
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::camel_case;

    #[test]
    fn env_keys_become_camel_case() {
        assert_eq!(camel_case("output_suffix"), "outputSuffix");
        assert_eq!(camel_case("FAIL_FAST"), "failFast");
        assert_eq!(camel_case("format"), "format");
    }
}
