//! Configuration module for http_bridge.
//!
//! This module provides centralized configuration loading from environment
//! variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use http_bridge::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Charset: {}", config.http.charset);
//! ```

mod error;
mod http;
mod logging;
mod parse;

pub use self::error::ConfigError;
pub use self::http::{HttpConfig, DEFAULT_CHARSET};
pub use self::logging::{LogFormat, LoggingConfig};

/// Complete bridge configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP defaults.
    pub http: HttpConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Charset: {}", self.http.charset);
        info!("  Log filter: {}", self.logging.filter);
        info!("  Log format: {:?}", self.logging.format);
        info!("  Service name: {}", self.logging.service_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Clear all env vars that might affect the test
        std::env::remove_var("CHARSET");
        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("RUST_LOG");
        std::env::remove_var("LOG_FORMAT");
        std::env::remove_var("SERVICE_NAME");

        let config = Config::from_env().expect("Should load config");

        assert_eq!(config.http.charset, "UTF-8");
        assert_eq!(config.logging.filter, "http_bridge=info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.service_name, "http_bridge");
    }
}
