use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "semver-tool.toml";

/// Represents the complete configuration for semver-tool.
///
/// Only presentation and logging are configurable; version semantics are not.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration for what the CLI prints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print the JSON produced by `get full`
    #[serde(default)]
    pub json_pretty: bool,

    /// Colored error prefix on stderr
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json_pretty: false,
            color: true,
        }
    }
}

/// Configuration for diagnostic logging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    /// Default `env_logger` filter, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter (returned even if missing, so that
///    reading it reports the error)
/// 2. `semver-tool.toml` in current directory
/// 3. `semver-tool.toml` in the user config directory
pub fn find_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("invalid configuration")?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = find_config(config_path) else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to load {}", path.display()))
}
