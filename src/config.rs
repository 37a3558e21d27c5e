//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::intake::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::state::submission::DEFAULT_SUCCESS_RESET;

/// Env var override for the intake API base URL
pub const API_BASE_ENV: &str = "INTAKE_API_BASE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Intake API base URL
    pub api_base_url: Option<String>,
    /// Seconds before a success banner clears back to idle
    pub success_reset_secs: Option<u64>,
    /// Transport timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "viagens", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective API base: env var wins over the config file
    pub fn api_base(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn success_reset(&self) -> Duration {
        self.success_reset_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SUCCESS_RESET)
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
