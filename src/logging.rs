//! Structured logging setup
//!
//! Logs go to stderr so stdout carries nothing but the message.
//! `RUST_LOG` takes precedence over the configured level.

use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Map a configured level name to a filter; unknown names fall back to info
pub fn level_filter(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(level: &str) {
    let default = level_filter(level);

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(default.into()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();

        tracing::debug!(level = %default, "Logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let cases = [
            ("debug", LevelFilter::DEBUG),
            ("info", LevelFilter::INFO),
            ("warn", LevelFilter::WARN),
            ("error", LevelFilter::ERROR),
            ("DEBUG", LevelFilter::DEBUG),
            ("invalid", LevelFilter::INFO),
            ("", LevelFilter::INFO),
        ];

        for (name, expected) in cases {
            assert_eq!(level_filter(name), expected, "level: {:?}", name);
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        init("error");
    }
}
