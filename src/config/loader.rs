//! Configuration file loading with precedence handling.

use crate::catalog::artsy::DEFAULT_API_BASE;
use crate::catalog::Credentials;
use crate::model::DEFAULT_MIN_QUERY_CHARS;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ARTSCOUT_CONFIG";
/// Environment variable overriding the client id.
pub const CLIENT_ID_ENV: &str = "ARTSCOUT_CLIENT_ID";
/// Environment variable overriding the client secret.
pub const CLIENT_SECRET_ENV: &str = "ARTSCOUT_CLIENT_SECRET";
/// Environment variable overriding the API root.
pub const API_BASE_ENV: &str = "ARTSCOUT_API_BASE";

/// Default number of results requested per search.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A resolved value is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/artscout/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// API root, e.g. `https://api.artsy.net/api`.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Application client id for the token endpoint.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Application client secret for the token endpoint.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Results requested per search.
    #[serde(default)]
    pub result_limit: Option<usize>,

    /// Minimum query length in characters.
    #[serde(default)]
    pub min_query_chars: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API root.
    pub api_base_url: String,
    /// Client id, if configured anywhere.
    pub client_id: Option<String>,
    /// Client secret, if configured anywhere.
    pub client_secret: Option<String>,
    /// Results requested per search.
    pub result_limit: usize,
    /// Minimum query length in characters.
    pub min_query_chars: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_base_url", &self.api_base_url)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("result_limit", &self.result_limit)
            .field("min_query_chars", &self.min_query_chars)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            client_id: None,
            client_secret: None,
            result_limit: DEFAULT_RESULT_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Credentials for the token endpoint, when both halves are present.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(Credentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => None,
        }
    }

    /// Reject values the rest of the application cannot work with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.result_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "result_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/artscout/artscout.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("artscout").join("artscout.log")
    } else {
        PathBuf::from("artscout.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/artscout/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("artscout").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ARTSCOUT_CONFIG` environment variable
/// 3. Default path `~/.config/artscout/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        client_id: config.client_id.or(defaults.client_id),
        client_secret: config.client_secret.or(defaults.client_secret),
        result_limit: config.result_limit.unwrap_or(defaults.result_limit),
        min_query_chars: config.min_query_chars.unwrap_or(defaults.min_query_chars),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ARTSCOUT_CLIENT_ID`
/// - `ARTSCOUT_CLIENT_SECRET`
/// - `ARTSCOUT_API_BASE`
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(id) = non_empty_env(CLIENT_ID_ENV) {
        config.client_id = Some(id);
    }

    if let Some(secret) = non_empty_env(CLIENT_SECRET_ENV) {
        config.client_secret = Some(secret);
    }

    if let Some(base) = non_empty_env(API_BASE_ENV) {
        config.api_base_url = base;
    }

    config
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_base_override: Option<String>,
    limit_override: Option<usize>,
    min_chars_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(base) = api_base_override {
        config.api_base_url = base;
    }

    if let Some(limit) = limit_override {
        config.result_limit = limit;
    }

    if let Some(min) = min_chars_override {
        config.min_query_chars = min;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
