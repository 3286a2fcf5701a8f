use crate::domain::error::CompareError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset means the transport default (none).
    pub timeout_secs: Option<u64>,
    pub http_proxy: Option<String>,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            http_proxy: None,
            enable_emoji: true,
            logging: Logging::default(),
        }
    }
}

impl Logging {
    /// Map the configured level onto an `EnvFilter` directive
    pub fn filter_directive(&self) -> &'static str {
        match self.level.to_ascii_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

// Defaults
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mtc").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, CompareError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Read the config at `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, CompareError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn load_config() -> Result<Config, CompareError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Write the default config to `path` unless a file is already there.
///
/// Returns `false` when an existing file was left untouched.
pub fn write_config_sample(path: &Path) -> Result<bool, CompareError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| CompareError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)?;
    debug!(path = %path.display(), "wrote config sample");

    Ok(true)
}
