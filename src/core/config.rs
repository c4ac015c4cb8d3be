use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::WxaError;

pub const DEFAULT_API_URL: &str = "https://api.weather.gov/alerts/active";
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 5000;

pub const API_URL_ENV: &str = "WXA_API_URL";
pub const USER_AGENT_ENV: &str = "WXA_USER_AGENT";

/// Keys accepted by `wxa config set`
pub const CONFIG_KEYS: [&str; 4] = ["api-url", "user-agent", "error-timeout", "default-state"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// api.weather.gov rejects requests without a User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_error_timeout_ms")]
    pub error_timeout_ms: u64,
    /// Pre-fills the input of the interactive UI
    #[serde(default)]
    pub default_state: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("wxa/{} (command-line weather alerts)", env!("CARGO_PKG_VERSION"))
}

fn default_error_timeout_ms() -> u64 {
    DEFAULT_ERROR_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            error_timeout_ms: default_error_timeout_ms(),
            default_state: None,
        }
    }
}

impl Config {
    /// Load the user config and apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path; missing, empty or unreadable content
    /// yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config file {:?}: {}", path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("wxa").join("config.json"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            if !agent.trim().is_empty() {
                self.user_agent = agent;
            }
        }
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }

    /// Set a value by its CLI key name
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::Result<()> {
        match key {
            "api-url" => {
                url::Url::parse(value)
                    .map_err(|e| WxaError::invalid_url(format!("{}: {}", value, e)))?;
                self.api_url = value.to_string();
            }
            "user-agent" => {
                if value.trim().is_empty() {
                    return Err(WxaError::config("user-agent cannot be empty"));
                }
                self.user_agent = value.to_string();
            }
            "error-timeout" => {
                self.error_timeout_ms = value.parse().map_err(|_| {
                    WxaError::config(format!(
                        "error-timeout must be a number of milliseconds, got '{}'",
                        value
                    ))
                })?;
            }
            "default-state" => {
                let state = value.trim().to_uppercase();
                self.default_state = (!state.is_empty()).then_some(state);
            }
            other => {
                return Err(WxaError::config(format!(
                    "unknown key '{}' (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
