//! User configuration management

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::process::DEFAULT_QUERY_TIMEOUT;
use crate::terminal::TargetPattern;

/// Overrides the directory holding `config.toml`
pub const CONFIG_DIR_ENV: &str = "REFPASTE_CONFIG_DIR";

/// Smallest accepted `process.enumeration_timeout_ms`
pub const MIN_ENUMERATION_TIMEOUT_MS: u64 = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_paste: AutoPasteConfig,

    #[serde(default)]
    pub process: ProcessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoPasteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Application names searched for in terminal process trees
    #[serde(default)]
    pub applications: Vec<String>,
}

impl Default for AutoPasteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            applications: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    #[serde(default = "default_enumeration_timeout_ms")]
    pub enumeration_timeout_ms: u64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            enumeration_timeout_ms: default_enumeration_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_enumeration_timeout_ms() -> u64 {
    DEFAULT_QUERY_TIMEOUT.as_millis() as u64
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Configured application names, trimmed, with blank entries dropped
    pub fn target_applications(&self) -> Vec<String> {
        self.auto_paste
            .applications
            .iter()
            .map(|app| app.trim())
            .filter(|app| !app.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_auto_paste_enabled(&self) -> bool {
        self.auto_paste.enabled && !self.target_applications().is_empty()
    }

    pub fn target_patterns(&self) -> Result<Vec<TargetPattern>> {
        Ok(TargetPattern::parse_all(self.target_applications())?)
    }

    pub fn enumeration_timeout(&self) -> Duration {
        Duration::from_millis(self.process.enumeration_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.process.enumeration_timeout_ms < MIN_ENUMERATION_TIMEOUT_MS {
            bail!(
                "process.enumeration_timeout_ms is {} but must be at least {}",
                self.process.enumeration_timeout_ms,
                MIN_ENUMERATION_TIMEOUT_MS
            );
        }
        Ok(())
    }
}

pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join("refpaste"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    config
        .validate()
        .map_err(|err| anyhow!("Invalid config {}: {}", path.display(), err))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    config.validate()?;
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
