/*!
 * Error types for the bibscan application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Analysis errors are fatal to the current analysis. Provider errors are
 * recovered by the provider chain and never reach the caller.
 */

use thiserror::Error;

/// Errors that can occur when working with translation provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection (timeouts included)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider-specific quota or usage sentinel
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Errors that reject an analysis before any result is produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The table has no rows or no columns
    #[error("The table is empty")]
    EmptyTable,

    /// The table passed validation but no column looks like a title column
    #[error("Could not identify a title column among: {}", .columns.join(", "))]
    NoTitleColumn {
        /// Column names that were inspected
        columns: Vec<String>,
    },

    /// The table does not look like a list of articles or books
    #[error("The file does not look like a list of academic articles or books; expected columns such as 'title' or 'author'")]
    NotAcademic,
}

impl AnalysisError {
    /// Missing or unusable input (empty table, no title column)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyTable | Self::NoTitleColumn { .. })
    }

    /// Input without academic-content signal
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::NotAcademic)
    }
}

/// Errors that can occur while reading a delimited table
#[derive(Error, Debug)]
pub enum TableError {
    /// The file could not be read
    #[error("Failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not valid delimited text
    #[error("Failed to parse table: {0}")]
    Csv(#[from] csv::Error),

    /// The file has no header row
    #[error("Table has no header row")]
    MissingHeader,
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The background translation task panicked or was cancelled
    #[error("Translation task failed: {0}")]
    TaskFailed(String),
}
