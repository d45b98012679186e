use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

/// Smallest buffer that can hold a message header.
const MIN_RESPONSE_SIZE: usize = 12;

/// Largest payload a UDP datagram can carry.
const MAX_RESPONSE_SIZE: usize = 65_535;

/// Main configuration structure for dnsprobe
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server the query is sent to
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsprobe.toml in current directory
    /// 3. /etc/dnsprobe/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnsprobe.toml").exists() {
            Self::from_file("dnsprobe.toml")?
        } else if std::path::Path::new("/etc/dnsprobe/config.toml").exists() {
            Self::from_file("/etc/dnsprobe/config.toml")?
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
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.upstream.server = Some(server);
        }
        if let Some(port) = overrides.port {
            self.upstream.port = port;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.upstream.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.upstream.server.as_deref() {
            None => {
                return Err(ConfigError::Validation(
                    "No DNS server configured (use -s <server>)".to_string(),
                ))
            }
            Some(s) if s.trim().is_empty() => {
                return Err(ConfigError::Validation(
                    "DNS server cannot be empty".to_string(),
                ))
            }
            Some(_) => {}
        }

        if self.upstream.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if !(MIN_RESPONSE_SIZE..=MAX_RESPONSE_SIZE).contains(&self.upstream.max_response_size) {
            return Err(ConfigError::Validation(format!(
                "max_response_size must be between {} and {}, got {}",
                MIN_RESPONSE_SIZE, MAX_RESPONSE_SIZE, self.upstream.max_response_size
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
