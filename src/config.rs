//! Configuration handling for the host

use crate::script::{ScriptConfig, DEFAULT_ROOT_NAME};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Name the root automation object is injected under
    pub root_name: Option<String>,
    /// Never open the terminal UI; forms are dismissed immediately
    pub headless: Option<bool>,
    /// Engine operation budget per run
    pub max_operations: Option<u64>,
    /// Maximum script call depth
    pub max_call_levels: Option<usize>,
    /// Maximum size of any string value
    pub max_string_size: Option<usize>,
}

impl HostConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "automation-host", "automation-host")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: HostConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn root_name(&self) -> &str {
        self.root_name.as_deref().unwrap_or(DEFAULT_ROOT_NAME)
    }

    pub fn headless(&self) -> bool {
        self.headless.unwrap_or(false)
    }

    /// Engine limits with configured overrides applied
    pub fn script_config(&self) -> ScriptConfig {
        let defaults = ScriptConfig::default();
        ScriptConfig {
            max_operations: self.max_operations.unwrap_or(defaults.max_operations),
            max_call_levels: self.max_call_levels.unwrap_or(defaults.max_call_levels),
            max_string_size: self.max_string_size.unwrap_or(defaults.max_string_size),
            ..defaults
        }
    }
}
