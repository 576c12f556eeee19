//! HTTP defaults sourced from the host configuration.

use super::parse::env_or;
use super::ConfigError;

/// Fallback charset for the JSON content-type default.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// HTTP defaults loaded from environment.
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Charset advertised in the default `Content-Type` (from CHARSET).
    pub charset: String,
}

impl HttpConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            charset: Self::validated(env_or("CHARSET", DEFAULT_CHARSET))?,
        })
    }

    fn validated(charset: String) -> Result<String, ConfigError> {
        if charset.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "CHARSET".into(),
                message: "charset must not be empty".into(),
            });
        }
        Ok(charset)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}
