//! Error types for the order book viewer

use thiserror::Error;

/// Order book viewer errors
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to parse CSV: {0}")]
    ParseError(String),

    #[error("Dataset contains no rows")]
    EmptyDataset,

    #[error("Missing required field `{field}` on row at time {time}")]
    MissingField { field: &'static str, time: f64 },

    #[error("Requested time is not a finite number: {0}")]
    InvalidTime(f64),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<csv::Error> for ViewerError {
    fn from(err: csv::Error) -> Self {
        ViewerError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
