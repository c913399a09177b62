//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/printwrapped/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/printwrapped/` (~/.config/printwrapped/)
//! - Data: `$XDG_DATA_HOME/printwrapped/` (~/.local/share/printwrapped/)
//! - State/Logs: `$XDG_STATE_HOME/printwrapped/` (~/.local/state/printwrapped/)
//!
//! The yearly statistics files are not ours: the host's aggregation job
//! writes them into an `achievements` directory that sits next to this
//! application's data folder. `[stats] dir` overrides that location.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Statistics archive configuration
    #[serde(default)]
    pub stats: StatsConfig,

    /// Card asset configuration
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statistics archive configuration
#[derive(Debug, Deserialize, Default)]
pub struct StatsConfig {
    /// Override path for the yearly statistics directory
    pub dir: Option<PathBuf>,
}

/// Card asset configuration
#[derive(Debug, Deserialize, Default)]
pub struct AssetsConfig {
    /// Override path for the card font (`.woff`)
    pub font: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/printwrapped/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("printwrapped").join("config.toml")
    }

    /// Returns the data directory path (for bundled assets)
    ///
    /// `$XDG_DATA_HOME/printwrapped/`
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("printwrapped")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/printwrapped/`
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("printwrapped")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/printwrapped/printwrapped.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("printwrapped.log")
    }

    /// Returns the yearly statistics directory.
    ///
    /// The host writes one `<year>.json` per calendar year into the
    /// `achievements` directory next to our data folder; `[stats] dir`
    /// overrides that convention.
    pub fn stats_dir(&self) -> PathBuf {
        if let Some(dir) = &self.stats.dir {
            return dir.clone();
        }

        let data_dir = Self::data_dir();
        match data_dir.parent() {
            Some(parent) => parent.join("achievements"),
            None => PathBuf::from("achievements"),
        }
    }

    /// Returns the card font path.
    ///
    /// `$XDG_DATA_HOME/printwrapped/fonts/<font file>` unless
    /// `[assets] font` overrides it.
    pub fn font_path(&self) -> PathBuf {
        if let Some(font) = &self.assets.font {
            return font.clone();
        }

        Self::data_dir()
            .join("fonts")
            .join(crate::assets::FONT_FILE_OPEN_SANS_BOLD)
    }
}
