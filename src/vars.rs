//! Environment variable access
//!
//! Detection and configuration read variables through [`EnvVars`] so tests
//! can supply a fixed set instead of mutating the process environment.

/// Read-only view of environment variables
pub trait EnvVars {
    /// Value of `key`, or `None` when the key is not present.
    ///
    /// A key set to the empty string is present and returns `Some("")`.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` exists, regardless of its value
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvVars for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values still count as present
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
pub use self::map::MapEnv;

#[cfg(test)]
mod map {
    use super::EnvVars;
    use std::collections::HashMap;

    /// Fixed in-memory environment for tests
    #[derive(Debug, Clone, Default)]
    pub struct MapEnv(HashMap<String, String>);

    impl MapEnv {
        pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            Self(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl EnvVars for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_reads_present_key() {
        std::env::set_var("MOTD_VARS_TEST", "value");
        assert_eq!(ProcessEnv.var("MOTD_VARS_TEST").as_deref(), Some("value"));
        std::env::remove_var("MOTD_VARS_TEST");
        assert_eq!(ProcessEnv.var("MOTD_VARS_TEST"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_empty_value_is_present() {
        std::env::set_var("MOTD_VARS_EMPTY", "");
        assert!(ProcessEnv.contains("MOTD_VARS_EMPTY"));
        std::env::remove_var("MOTD_VARS_EMPTY");
        assert!(!ProcessEnv.contains("MOTD_VARS_EMPTY"));
    }

    #[test]
    fn test_map_env() {
        let env = MapEnv::new([("TERM", "xterm"), ("SSH_CLIENT", "")]);
        assert_eq!(env.var("TERM").as_deref(), Some("xterm"));
        assert!(env.contains("SSH_CLIENT"));
        assert!(!env.contains("TERM_PROGRAM"));
    }
}
