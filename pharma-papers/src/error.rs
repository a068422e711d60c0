use std::result;

use thiserror::Error;

/// Error types for paper search and classification operations
#[derive(Error, Debug)]
pub enum PapersError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Search limit exceeded
    /// This error is returned when a search query requests more results than the maximum retrievable limit.
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },

    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Keyword configuration could not be loaded or compiled
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = result::Result<T, PapersError>;

impl From<std::io::Error> for PapersError {
    fn from(err: std::io::Error) -> Self {
        PapersError::IoError {
            message: err.to_string(),
        }
    }
}
