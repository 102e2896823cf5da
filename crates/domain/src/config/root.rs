use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rrl::{RrlConfig, MAX_ALLOWANCE_PER_SECOND};

const LOCAL_CONFIG_PATH: &str = "ferrous-rrl.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-rrl/config.toml";

/// Main configuration structure for Ferrous RRL
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Per-category response allowances
    #[serde(default)]
    pub rrl: RrlConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-rrl.toml in current directory
    /// 3. /etc/ferrous-rrl/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(rps) = overrides.responses_per_second {
            self.rrl.responses_per_second = rps;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((category, allowance)) = self.rrl.first_excessive() {
            return Err(ConfigError::Validation(format!(
                "{} allowance {} exceeds {} per second",
                category, allowance, MAX_ALLOWANCE_PER_SECOND
            )));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides applied after the config file
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub responses_per_second: Option<u32>,
    pub log_level: Option<String>,
}
