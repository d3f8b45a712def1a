use std::time::Duration;
use thiserror::Error;

/// MOTD client error types
#[derive(Error, Debug)]
pub enum MotdError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out after {timeout:?} waiting for the server to close the connection")]
    ReadTimeout { timeout: Duration },

    #[error("Failed to read from connection: {0}")]
    Read(#[source] std::io::Error),

    #[error("TERM environment variable not set")]
    TerminalNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for MOTD client operations
pub type Result<T> = std::result::Result<T, MotdError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display_config() {
        let err = MotdError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_connect() {
        let err = MotdError::Connect {
            address: "localhost:4200".to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert_eq!(err.to_string(), "Failed to connect to localhost:4200: refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_display_read_timeout() {
        let err = MotdError::ReadTimeout {
            timeout: Duration::from_millis(100),
        };
        assert!(err.to_string().contains("100ms"));
    }

    #[test]
    fn test_error_display_terminal_not_set() {
        let err = MotdError::TerminalNotSet;
        assert_eq!(err.to_string(), "TERM environment variable not set");
    }
}
