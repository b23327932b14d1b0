//! Application configuration management.
//!
//! The configuration names the two sheet endpoints, the offline flag and
//! the request timeout. It is stored at `~/.config/shelfcache/config.json`
//! and can be overridden from the environment (or a `.env` file loaded by
//! the binary).

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "shelfcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default HTTP request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_SCHEDULE_URL: &str = "SHELFCACHE_SCHEDULE_URL";
pub const ENV_INVENTORY_URL: &str = "SHELFCACHE_INVENTORY_URL";
pub const ENV_OFFLINE: &str = "SHELFCACHE_OFFLINE";

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Published endpoint of the shows sheet
    #[serde(default)]
    pub schedule_url: Option<String>,
    /// Published endpoint of the inventory sheet
    #[serde(default)]
    pub inventory_url: Option<String>,
    #[serde(default)]
    pub offline_mode: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_url: None,
            inventory_url: None,
            offline_mode: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Apply `SHELFCACHE_*` environment overrides on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SCHEDULE_URL) {
            self.schedule_url = Some(url);
        }
        if let Some(url) = lookup(ENV_INVENTORY_URL) {
            self.inventory_url = Some(url);
        }
        if let Some(flag) = lookup(ENV_OFFLINE) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.offline_mode = true,
                "0" | "false" | "no" => self.offline_mode = false,
                other => warn!(value = other, "Ignoring unrecognized {}", ENV_OFFLINE),
            }
        }
        self
    }

    /// An endpoint counts as configured only when it is non-blank.
    pub fn schedule_endpoint(&self) -> Option<&str> {
        self.schedule_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn inventory_endpoint(&self) -> Option<&str> {
        self.inventory_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
