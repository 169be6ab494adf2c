//! Error types for quote loading and persistence.
//!
//! The calculation itself never fails on business data; problems with
//! windows, films or prices are collected as validation issues instead.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for caller-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed JSON input (-3)
    ParseError = -3,
    /// Quote id unknown to the store (-4)
    QuoteNotFound = -4,
    /// Input tree is structurally unusable (-5)
    InvalidTree = -5,
}

/// Main error type for the quote engine's collaborators.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Quote not found: {id}")]
    QuoteNotFound { id: String },

    #[error("Invalid quote tree: {message}")]
    InvalidTree { message: String },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Report formatting failed")]
    Format(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::Json { .. } => ErrorCode::ParseError,
            QuoteError::QuoteNotFound { .. } => ErrorCode::QuoteNotFound,
            QuoteError::InvalidTree { .. } => ErrorCode::InvalidTree,
            QuoteError::Serialize(_) => ErrorCode::ParseError,
            QuoteError::Format(_) => ErrorCode::ParseError,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for engine collaborator operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = QuoteError::QuoteNotFound { id: "q1".into() };
        assert_eq!(err.code(), ErrorCode::QuoteNotFound);
        assert_eq!(err.code_value(), -4);
        assert_eq!(err.to_string(), "Quote not found: q1");
    }

    #[test]
    fn test_io_error_maps_to_file_not_found() {
        let err: QuoteError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), ErrorCode::FileNotFound);
    }
}
