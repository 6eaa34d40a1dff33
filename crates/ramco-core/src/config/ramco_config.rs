//! Top-level client configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ApiConfig, PagingConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RAMCO_*`)
/// 3. Project config (`ramco.toml` in the given root)
/// 4. User config (`~/.ramco/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RamcoConfig {
    pub api: ApiConfig,
    pub paging: PagingConfig,
}

/// Programmatic overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_pages: Option<usize>,
}

impl RamcoConfig {
    /// Load configuration with layered resolution. See the type docs for order.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // An unreadable user config is not fatal.
                        tracing::warn!("ramco: skipping user config: {e}");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        tracing::debug!(
            url = config.api.effective_url(),
            max_pages = config.paging.effective_max_pages(),
            "ramco: config loaded"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Config with only an access key set; everything else defaults.
    pub fn with_key(key: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.key = Some(key.into());
        config
    }

    /// Validate the configuration values.
    pub fn validate(config: &RamcoConfig) -> Result<(), ConfigError> {
        if let Some(ref url) = config.api.url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::ValidationFailed {
                    field: "api.url".to_string(),
                    message: format!("'{url}' must be an http(s) URL"),
                });
            }
        }
        if config.api.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "api.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.paging.max_pages == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "paging.max_pages".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the access key, failing when it is missing or blank.
    pub fn require_key(&self) -> Result<&str, ConfigError> {
        match self.api.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::ValidationFailed {
                field: "api.key".to_string(),
                message: "an access key is required".to_string(),
            }),
        }
    }

    /// Returns the user config path: `~/.ramco/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(defaults::USER_CONFIG_DIR)
                .join(defaults::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut RamcoConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RamcoConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut RamcoConfig, other: &RamcoConfig) {
        if other.api.url.is_some() {
            base.api.url = other.api.url.clone();
        }
        if other.api.key.is_some() {
            base.api.key = other.api.key.clone();
        }
        if other.api.timeout_secs.is_some() {
            base.api.timeout_secs = other.api.timeout_secs;
        }
        if other.api.gzip.is_some() {
            base.api.gzip = other.api.gzip;
        }
        if other.paging.max_pages.is_some() {
            base.paging.max_pages = other.paging.max_pages;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RAMCO_API_URL`, `RAMCO_API_KEY`, `RAMCO_TIMEOUT_SECS`, `RAMCO_MAX_PAGES`.
    fn apply_env_overrides(config: &mut RamcoConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("RAMCO_API_URL") {
            config.api.url = Some(val);
        }
        if let Ok(val) = std::env::var("RAMCO_API_KEY") {
            config.api.key = Some(val);
        }
        if let Ok(val) = std::env::var("RAMCO_TIMEOUT_SECS") {
            config.api.timeout_secs = Some(parse_env("RAMCO_TIMEOUT_SECS", &val)?);
        }
        if let Ok(val) = std::env::var("RAMCO_MAX_PAGES") {
            config.paging.max_pages = Some(parse_env("RAMCO_MAX_PAGES", &val)?);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut RamcoConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.api_url {
            config.api.url = Some(v.clone());
        }
        if let Some(ref v) = o.api_key {
            config.api.key = Some(v.clone());
        }
        if let Some(v) = o.timeout_secs {
            config.api.timeout_secs = Some(v);
        }
        if let Some(v) = o.max_pages {
            config.paging.max_pages = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        field: name.to_string(),
        message: format!("cannot parse '{raw}'"),
    })
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
