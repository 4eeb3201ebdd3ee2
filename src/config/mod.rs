//! Configuration management
//!
//! [`ShellSettings`] holds the display constants the dashboard frame reads
//! from context. They are fixed at compile time so the server render and the
//! hydrated client always agree.
//!
//! [`ServerConfig`] is only built for the server launcher and is loaded from
//! an optional `learnhub.{toml,json,yaml}` file plus `LEARNHUB_*` environment
//! variables.

use crate::navigation::MOBILE_BREAKPOINT_PX;

/// Display settings shared by every component in the dashboard frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellSettings {
    /// Title shown at the top of the sidebar.
    pub brand: String,
    /// Name shown next to the avatar in the header.
    pub user_name: String,
    /// Sidebar footer line.
    pub copyright: String,
    /// Width below which sidebar links close the overlay.
    pub mobile_breakpoint_px: f64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            brand: "LearnHub".to_string(),
            user_name: "User Name".to_string(),
            copyright: "© 2024 LearnHub. All rights reserved.".to_string(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

#[cfg(feature = "server")]
pub use server::{load_config, load_config_from, ConfigError, ServerConfig, DEFAULT_LOG_FILTER};

#[cfg(feature = "server")]
mod server {
    use std::path::Path;

    use serde::Deserialize;
    use thiserror::Error;
    use tracing_subscriber::EnvFilter;

    pub const DEFAULT_LOG_FILTER: &str = "learnhub_shell=info";

    /// Base name of the optional config file in the working directory.
    const CONFIG_BASENAME: &str = "learnhub";

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Load(#[from] ::config::ConfigError),

        #[error("invalid log filter {filter:?}: {reason}")]
        LogFilter { filter: String, reason: String },
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        #[serde(default = "default_log_filter")]
        pub log_filter: String,
    }

    fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.to_string()
    }

    impl ServerConfig {
        /// Parse `log_filter` into a subscriber filter.
        pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
            EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::LogFilter {
                filter: self.log_filter.clone(),
                reason: e.to_string(),
            })
        }
    }

    pub fn load_config() -> Result<ServerConfig, ConfigError> {
        load_config_from(Path::new(CONFIG_BASENAME))
    }

    /// Load from `base` (extension picked by the `config` crate) and the
    /// environment. Environment wins over the file.
    pub fn load_config_from(base: &Path) -> Result<ServerConfig, ConfigError> {
        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            // Load from config file if it exists
            .add_source(::config::File::with_name(&base.to_string_lossy()).required(false))
            // Override with environment variables (LEARNHUB_LOG_FILTER, ...)
            .add_source(
                ::config::Environment::with_prefix("LEARNHUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ServerConfig = config.try_deserialize()?;
        config.env_filter()?;
        Ok(config)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serial_test::serial;
        use std::fs;

        const ENV_KEY: &str = "LEARNHUB_LOG_FILTER";

        #[test]
        #[serial]
        fn test_defaults_without_file() {
            std::env::remove_var(ENV_KEY);
            let dir = tempfile::tempdir().unwrap();

            let config = load_config_from(&dir.path().join("learnhub")).unwrap();
            assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        }

        #[test]
        #[serial]
        fn test_file_overrides_default() {
            std::env::remove_var(ENV_KEY);
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("learnhub.toml"), "log_filter = \"debug\"\n").unwrap();

            let config = load_config_from(&dir.path().join("learnhub")).unwrap();
            assert_eq!(config.log_filter, "debug");
        }

        #[test]
        #[serial]
        fn test_env_overrides_file() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("learnhub.toml"), "log_filter = \"debug\"\n").unwrap();

            std::env::set_var(ENV_KEY, "warn");
            let result = load_config_from(&dir.path().join("learnhub"));
            std::env::remove_var(ENV_KEY);

            assert_eq!(result.unwrap().log_filter, "warn");
        }

        #[test]
        #[serial]
        fn test_invalid_filter_rejected() {
            std::env::remove_var(ENV_KEY);
            let dir = tempfile::tempdir().unwrap();
            fs::write(
                dir.path().join("learnhub.toml"),
                "log_filter = \"learnhub_shell=loudest\"\n",
            )
            .unwrap();

            let err = load_config_from(&dir.path().join("learnhub")).unwrap_err();
            assert!(matches!(err, ConfigError::LogFilter { .. }), "got {err:?}");
        }
    }
}
