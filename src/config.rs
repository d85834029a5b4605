//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`S4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::throughput::Suite;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Throughput runner configuration
    #[serde(default)]
    pub throughput: ThroughputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`S4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // S4D_THROUGHPUT__ITERATIONS=500 -> throughput.iterations = 500
        figment = figment.merge(Env::prefixed("S4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Throughput runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputConfig {
    /// Timed calls per implementation
    pub iterations: u64,
    /// Untimed calls before timing starts
    pub warmup_iterations: u64,
    /// Suites to run, in order
    pub suites: Vec<Suite>,
}

impl Default for ThroughputConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            warmup_iterations: 10_000,
            suites: Suite::ALL.to_vec(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.throughput.iterations, 1_000_000);
        assert_eq!(config.throughput.warmup_iterations, 10_000);
        assert_eq!(config.throughput.suites.len(), Suite::ALL.len());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("iterations"));
        assert!(toml.contains("\"fast_normalize\""));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[throughput]\niterations = 42\n").unwrap();
        assert_eq!(config.throughput.iterations, 42);
        assert_eq!(config.throughput.warmup_iterations, 10_000);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_unknown_suite_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[throughput]\nsuites = [\"teleport\"]\n");
        assert!(result.is_err());
    }
}
