//! Logging configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;

/// Output format for the global subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a LOG_FORMAT value, falling back to text.
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" | "" => LogFormat::Text,
            other => {
                eprintln!("Warning: Invalid LOG_FORMAT '{}', expected: text, json", other);
                LogFormat::Text
            }
        }
    }
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Output format (from LOG_FORMAT).
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Filter priority: LOG_LEVEL > RUST_LOG > default
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: http_bridge=debug
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            filter: Self::filter_from(env_opt("LOG_LEVEL"), env_opt("RUST_LOG")),
            format: LogFormat::parse(&env_or("LOG_FORMAT", "text")),
            service_name: env_or("SERVICE_NAME", "http_bridge"),
        })
    }

    /// Resolve the filter from LOG_LEVEL and RUST_LOG values.
    fn filter_from(level: Option<String>, rust_log: Option<String>) -> String {
        if let Some(level) = level {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("http_bridge={}", level);
                }
                _ => {
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        rust_log.unwrap_or_else(|| "http_bridge=info".to_string())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "http_bridge=info".to_string(),
            format: LogFormat::Text,
            service_name: "http_bridge".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        // Default
        assert_eq!(LoggingConfig::filter_from(None, None), "http_bridge=info");

        // RUST_LOG
        assert_eq!(
            LoggingConfig::filter_from(None, Some("http_bridge=warn".into())),
            "http_bridge=warn"
        );

        // LOG_LEVEL takes priority over RUST_LOG
        assert_eq!(
            LoggingConfig::filter_from(Some("debug".into()), Some("http_bridge=warn".into())),
            "http_bridge=debug"
        );

        // Invalid LOG_LEVEL falls through to RUST_LOG
        assert_eq!(
            LoggingConfig::filter_from(Some("loud".into()), Some("http_bridge=error".into())),
            "http_bridge=error"
        );
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
    }
}
