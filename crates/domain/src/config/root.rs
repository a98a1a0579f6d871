use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

pub const DEFAULT_CONFIG_FILE: &str = "rootwalk.toml";

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Iterative resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(root) = overrides.root_server {
            self.resolver.root_server = root;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(depth) = overrides.max_depth {
            self.resolver.max_depth = depth;
        }
        if let Some(budget) = overrides.max_queries {
            self.resolver.max_queries = budget;
        }
        if let Some(timeout) = overrides.query_timeout_secs {
            self.resolver.query_timeout_secs = Some(timeout);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.port == 0 {
            return Err(ConfigError::Validation(
                "Nameserver port cannot be 0".to_string(),
            ));
        }
        if resolver.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if resolver.max_iterations == 0 {
            return Err(ConfigError::Validation(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if resolver.max_queries == 0 {
            return Err(ConfigError::Validation(
                "max_queries must be at least 1".to_string(),
            ));
        }
        if resolver.recv_buffer_size < 12 {
            return Err(ConfigError::Validation(format!(
                "recv_buffer_size {} cannot hold a 12-byte DNS header",
                resolver.recv_buffer_size
            )));
        }
        if resolver.query_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "query_timeout_secs must be positive when set".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root_server: Option<Ipv4Addr>,
    pub port: Option<u16>,
    pub max_depth: Option<usize>,
    pub max_queries: Option<usize>,
    pub query_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
