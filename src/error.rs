//! # Error Types
//!
//! This module defines error types used throughout the backdrop library.

use thiserror::Error;

/// Main error type for backdrop operations
#[derive(Debug, Error)]
pub enum BackdropError {
    /// HTTP-level errors (request failure, bind failure, non-OK status)
    #[error("HTTP error: {0}")]
    Http(String),

    /// A choice rejected by validation
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
