use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the pattern examples.
///
/// Most examples are infallible; the ones that touch files, the queue
/// database or the network report through this type.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("The file \"{}\" does not exist.", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Conversion from {from} to {to} not available.")]
    UnsupportedConversion { from: String, to: String },

    #[error("No notification method set.")]
    NoStrategy,

    #[error("No snapshot at index {0}")]
    NoSuchSnapshot(usize),

    #[error("Unknown command status {0}")]
    UnknownStatus(i64),

    #[error("HTTP {status} error for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("No page available for {0}")]
    PageNotFound(String),
}

impl PatternError {
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
