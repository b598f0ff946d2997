// src/config.rs
//! Configuration loading and defaults

use crate::error::{BridgeError, Result};
use crate::reader::ReaderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub serial_port: String,
    pub baudrate: u32,
    pub bind_address: String,
    pub read_timeout_ms: u64,
    pub max_sentences: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            serial_port: "/dev/ttyACM0".to_string(),
            // ZED-F9P default rate
            baudrate: 115200,
            bind_address: "127.0.0.1:5000".to_string(),
            read_timeout_ms: 3000,
            max_sentences: 200,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from the config file, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| BridgeError::Other(format!("failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| BridgeError::Other(format!("failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BridgeError::Other(format!("failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(&config_path, contents)
            .map_err(|e| BridgeError::Other(format!("failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Config file path
    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| BridgeError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("gnss-bridge")
            .join("config.json"))
    }

    /// Connection parameters handed to each serial read session.
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            port: self.serial_port.clone(),
            baudrate: self.baudrate,
            read_timeout: Duration::from_millis(self.read_timeout_ms),
            max_sentences: self.max_sentences,
        }
    }
}
