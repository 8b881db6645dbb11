//! Configuration module for the order book viewer

use serde::Deserialize;
use std::env;

use crate::error::{Result, ViewerError};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log line format on stderr
    pub log_format: LogFormat,

    /// Rows shown by the table preview
    pub preview_rows: usize,

    /// Width in characters of the longest bar in the text renderer
    pub bar_width: usize,

    /// Terminal event poll interval in milliseconds
    pub tick_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let log_format = match env::var("VIEWER_LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let config = Self {
            log_format,
            preview_rows: env::var("VIEWER_PREVIEW_ROWS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            bar_width: env::var("VIEWER_BAR_WIDTH")
                .unwrap_or_else(|_| "40".to_string())
                .parse()
                .unwrap_or(40),
            tick_ms: env::var("VIEWER_TICK_MS")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.bar_width == 0 {
            return Err(ViewerError::ConfigError(
                "VIEWER_BAR_WIDTH must be greater than zero".to_string(),
            ));
        }
        if self.tick_ms == 0 {
            return Err(ViewerError::ConfigError(
                "VIEWER_TICK_MS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            preview_rows: 5,
            bar_width: 40,
            tick_ms: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_bar_width_rejected() {
        let config = Config {
            bar_width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ViewerError::ConfigError(_))
        ));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
