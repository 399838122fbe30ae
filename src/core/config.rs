//! Configuration management for the server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::error::{Error, Result};
use super::security::EnforcementMode;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Path allowlist configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the path allowlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Comma-separated list of allowed root directories, as given.
    /// Parsing happens when the allowlist is initialized.
    pub allowed_dirs: String,

    /// Data directory, always added to the allowlist when set.
    pub data_dir: Option<String>,

    /// Whether paths outside the allowed roots are denied.
    pub mode: EnforcementMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "pathguard-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_PATH_POLICY`). The allowlist itself is seeded
    /// from `ALLOWED_PROJECT_DIRS` and `DATA_DIR`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.security = SecurityConfig::from_env()?;

        Ok(config)
    }
}

impl SecurityConfig {
    /// Load the allowlist settings from environment variables.
    pub fn from_env() -> Result<Self> {
        let allowed_dirs = std::env::var("ALLOWED_PROJECT_DIRS").unwrap_or_default();

        let data_dir = std::env::var("DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty());

        let mode = match std::env::var("MCP_PATH_POLICY") {
            Ok(raw) => raw.parse().map_err(Error::config)?,
            Err(_) => EnforcementMode::default(),
        };

        Ok(Self {
            allowed_dirs,
            data_dir,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const SECURITY_VARS: [&str; 3] = ["ALLOWED_PROJECT_DIRS", "DATA_DIR", "MCP_PATH_POLICY"];

    fn clear_security_vars() {
        for var in SECURITY_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_security_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_security_vars();
        unsafe {
            std::env::set_var("ALLOWED_PROJECT_DIRS", "/path1, /path2");
            std::env::set_var("DATA_DIR", "/data");
            std::env::set_var("MCP_PATH_POLICY", "enforcing");
        }

        let security = SecurityConfig::from_env().unwrap();
        assert_eq!(security.allowed_dirs, "/path1, /path2");
        assert_eq!(security.data_dir.as_deref(), Some("/data"));
        assert_eq!(security.mode, EnforcementMode::Enforcing);

        clear_security_vars();
    }

    #[test]
    fn test_security_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_security_vars();

        let security = SecurityConfig::from_env().unwrap();
        assert!(security.allowed_dirs.is_empty());
        assert!(security.data_dir.is_none());
        assert_eq!(security.mode, EnforcementMode::Permissive);
    }

    #[test]
    fn test_empty_data_dir_is_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_security_vars();
        unsafe {
            std::env::set_var("DATA_DIR", "  ");
        }

        let security = SecurityConfig::from_env().unwrap();
        assert!(security.data_dir.is_none());

        clear_security_vars();
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_security_vars();
        unsafe {
            std::env::set_var("MCP_PATH_POLICY", "sometimes");
        }

        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));

        clear_security_vars();
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "pathguard-mcp-server");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.security.mode, EnforcementMode::Permissive);
    }
}
