//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where a confirmed cancel sends the user unless overridden.
pub const DEFAULT_CANCEL_URL: &str = "http://google.com";

/// User configuration for the signup TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Override for the cancel redirect target
    pub cancel_url: Option<String>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SignupConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// The effective cancel redirect target
    pub fn cancel_target(&self) -> &str {
        self.cancel_url.as_deref().unwrap_or(DEFAULT_CANCEL_URL)
    }
}
