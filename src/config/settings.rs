use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MAX_PATH_WIDTH: usize = 512;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Default `remotename:branchname` when `--remote` is not given
    pub remote: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub path_width: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BehaviorConfig {
    pub log_commands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Config::default_config().scan
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Config::default_config().output
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Config::default_config().behavior
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("rgit"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = match Self::config_path() {
            Ok(path) => path,
            Err(ConfigError::DirectoryNotFound) => return Ok(Self::default_config()),
            Err(e) => return Err(e),
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default_config());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        // Validate config
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            scan: ScanConfig {
                remote: String::new(),
            },
            output: OutputConfig {
                color: true,
                path_width: 55,
            },
            behavior: BehaviorConfig {
                log_commands: false,
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.path_width == 0 || self.output.path_width > MAX_PATH_WIDTH {
            return Err(ConfigError::InvalidValue(format!(
                "path_width must be between 1 and {}",
                MAX_PATH_WIDTH
            )));
        }

        if self.scan.remote.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "remote '{}' must not contain whitespace",
                self.scan.remote
            )));
        }

        Ok(())
    }
}
