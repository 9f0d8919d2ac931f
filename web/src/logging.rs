//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.log_format() {
            LogFormat::Json => fmt().json().with_env_filter(filter).init(),
            LogFormat::Pretty => fmt().pretty().with_env_filter(filter).init(),
            LogFormat::Full => fmt().with_env_filter(filter).init(),
        }
    }

    fn log_format(&self) -> LogFormat {
        match self.format.as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Full,
        }
    }
}

/// Output layout; unknown names fall back to the single-line formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
    Full,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(name: &str) -> LogFormat {
        LoggingConfig {
            format: name.into(),
            ..LoggingConfig::default()
        }
        .log_format()
    }

    #[test]
    fn default_format_is_pretty() {
        assert_eq!(LoggingConfig::default().log_format(), LogFormat::Pretty);
    }

    #[test]
    fn format_names_select_layout() {
        assert_eq!(format("json"), LogFormat::Json);
        assert_eq!(format("pretty"), LogFormat::Pretty);
        assert_eq!(format("text"), LogFormat::Full);
    }
}
