//! Configuration management for Sitepilot
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    ACTION_DELAY_MAX_MS, DEFAULT_ACTION_DELAY_MS, DEFAULT_FEEDBACK_FLASH_MS, DEFAULT_TOAST_DURATION_MS,
    FEEDBACK_FLASH_MAX_MS, FEEDBACK_FLASH_MIN_MS, TOAST_DURATION_MAX_MS, TOAST_DURATION_MIN_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start with cards expanded (full detail) instead of collapsed
    pub start_expanded: bool,
    /// How long toast notifications stay on screen, in milliseconds
    pub toast_duration_ms: u64,
}

/// Simulation timings for the mock assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Artificial delay before a primary action completes, in milliseconds
    pub action_delay_ms: u64,
    /// Duration of the thumbs-up acknowledgement flash, in milliseconds
    pub feedback_flash_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show suggestion descriptions on cards
    pub show_descriptions: bool,
    /// Show the AI confidence gauge on cards
    pub show_confidence: bool,
    /// Show the key-hint line at the bottom of each card
    pub show_shortcuts: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file under the cache directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_expanded: true,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            action_delay_ms: DEFAULT_ACTION_DELAY_MS,
            feedback_flash_ms: DEFAULT_FEEDBACK_FLASH_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_confidence: true,
            show_shortcuts: true,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Look for `config.toml` in the platform config directory
    pub fn find_config_file() -> Result<Option<PathBuf>> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(None);
        };

        let path = config_dir.join("sitepilot").join("config.toml");
        if path.exists() {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.simulation.action_delay_ms > ACTION_DELAY_MAX_MS {
            anyhow::bail!(
                "simulation.action_delay_ms must be at most {} (got {})",
                ACTION_DELAY_MAX_MS,
                self.simulation.action_delay_ms
            );
        }

        if !(FEEDBACK_FLASH_MIN_MS..=FEEDBACK_FLASH_MAX_MS).contains(&self.simulation.feedback_flash_ms) {
            anyhow::bail!(
                "simulation.feedback_flash_ms must be between {} and {} (got {})",
                FEEDBACK_FLASH_MIN_MS,
                FEEDBACK_FLASH_MAX_MS,
                self.simulation.feedback_flash_ms
            );
        }

        if !(TOAST_DURATION_MIN_MS..=TOAST_DURATION_MAX_MS).contains(&self.ui.toast_duration_ms) {
            anyhow::bail!(
                "ui.toast_duration_ms must be between {} and {} (got {})",
                TOAST_DURATION_MIN_MS,
                TOAST_DURATION_MAX_MS,
                self.ui.toast_duration_ms
            );
        }

        Ok(())
    }

    /// Write a commented default configuration file at `path`
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let config = Config::default();
        let body = toml::to_string_pretty(&config).context("Failed to serialize default config")?;
        let content = format!("# Sitepilot Configuration File\n# All values shown are the defaults.\n\n{body}");

        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("{}", crate::constants::CONFIG_GENERATED);
        Ok(())
    }
}
