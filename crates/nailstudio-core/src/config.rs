use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    API_KEY_ENV_VARS, DEFAULT_ENDPOINT, DEFAULT_EXPORT_PREFIX, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, SAMPLE_IMAGE_URL,
};
use crate::error::{NailStudioError, Result};

/// Top-level settings file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub generator: GeneratorConfig,
    pub export: ExportConfig,
    pub sample: SampleConfig,
}

impl StudioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Takes precedence over the environment when set.
    pub api_key: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the config, else the first non-empty variable in
    /// [`API_KEY_ENV_VARS`].
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        let configured = self.api_key.clone().filter(|k| !k.trim().is_empty());
        configured
            .or_else(|| {
                API_KEY_ENV_VARS
                    .iter()
                    .filter_map(|name| lookup(name))
                    .find(|k| !k.trim().is_empty())
            })
            .map(|k| k.trim().to_string())
            .ok_or(NailStudioError::MissingApiKey)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Initial directory of the export dialog; the working directory when unset.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub url: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            url: SAMPLE_IMAGE_URL.to_string(),
        }
    }
}
