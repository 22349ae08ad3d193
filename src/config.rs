//! Client configuration.
//!
//! Values come from an optional YAML file and are then overridden by
//! environment variables:
//!
//! - `TEMPOLEARN_API_URL`: backend base URL (default `http://localhost:8000/api`)
//! - `TEMPOLEARN_TOKEN`: session token for the signed-in user
//! - `ANTHROPIC_API_KEY`: external generation key, required for uploads
//! - `TEMPOLEARN_TIMEOUT_SECS`: per-request timeout (default 30)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TempoError};

pub const ENV_API_URL: &str = "TEMPOLEARN_API_URL";
pub const ENV_TOKEN: &str = "TEMPOLEARN_TOKEN";
pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_TIMEOUT: &str = "TEMPOLEARN_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_token: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            session_token: None,
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load from `path` if given, else from the default location when it
    /// exists, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply overrides from a key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.session_token = Some(token);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            match raw.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_TIMEOUT),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(TempoError::Config("api_base_url must not be empty".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(TempoError::Config(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(TempoError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `$XDG_CONFIG_HOME/tempolearn/config.yaml`, falling back to `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("tempolearn").join("config.yaml"))
}
