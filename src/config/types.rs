use serde::Deserialize;
use std::time::Duration;

/// MOTD client configuration
///
/// Values are kept as read so that out-of-range input can be reported;
/// [`Config::connection_params`] turns them into checked parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server hostname
    pub host: String,

    /// Server port
    pub port: i64,

    /// Connect and read timeout in milliseconds
    pub timeout_ms: i64,

    /// Log level (debug, info, warn, error)
    pub log_level: String,
}

/// Validated connection parameters, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl ConnectionParams {
    /// `host:port`, bracketing IPv6 literals
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 4200,
            timeout_ms: 100,
            log_level: "info".to_string(),
        }
    }
}
