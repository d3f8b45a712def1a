//! Configuration module
//!
//! Builds the client configuration from built-in defaults, an optional
//! TOML file, `MOTD_*` environment variables and command-line flags, in
//! increasing order of precedence.

mod types;

pub use types::{Config, ConnectionParams};

use crate::error::{MotdError, Result};
use crate::vars::EnvVars;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Command-line values that override every other source
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<i64>,
    pub timeout_ms: Option<i64>,
    pub log_level: Option<String>,
}

/// Load configuration from all sources and validate it
pub fn load(path: Option<&Path>, vars: &impl EnvVars, overrides: Overrides) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => Config::default(),
    };

    config.apply_env(vars)?;
    config.apply_overrides(overrides);
    config.validate()?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MotdError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

impl Config {
    /// Apply `MOTD_*` environment variables
    pub fn apply_env(&mut self, vars: &impl EnvVars) -> Result<()> {
        if let Some(host) = vars.var("MOTD_HOST") {
            self.host = host;
        }
        if let Some(port) = vars.var("MOTD_PORT") {
            self.port = parse_int("MOTD_PORT", &port)?;
        }
        if let Some(timeout) = vars.var("MOTD_TIMEOUT_MS") {
            self.timeout_ms = parse_int("MOTD_TIMEOUT_MS", &timeout)?;
        }
        if let Some(level) = vars.var("MOTD_LOG_LEVEL").or_else(|| vars.var("MOTD_LOGLEVEL")) {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Check that the configuration describes a usable connection
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(MotdError::Config("host cannot be empty".to_string()));
        }
        if !(1..=65535).contains(&self.port) {
            return Err(MotdError::Config(format!(
                "port must be between 1 and 65535, got {}",
                self.port
            )));
        }
        if self.timeout_ms <= 0 {
            return Err(MotdError::Config(format!(
                "timeout must be positive, got {}",
                self.timeout_ms
            )));
        }
        Ok(())
    }

    /// Timeout as a duration; non-positive values map to zero
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.timeout_ms).unwrap_or(0))
    }

    /// Validate and return the immutable connection parameters
    pub fn connection_params(&self) -> Result<ConnectionParams> {
        self.validate()?;

        let port = u16::try_from(self.port)
            .map_err(|_| MotdError::Config(format!("port out of range: {}", self.port)))?;

        Ok(ConnectionParams {
            host: self.host.clone(),
            port,
            timeout: self.timeout(),
        })
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|e| {
        MotdError::Config(format!("{} must be an integer, got '{}': {}", key, value, e))
    })
}
