//! Error types for textgauge operations.
//!
//! This module defines the main error type [`TextGaugeError`] which represents
//! all possible errors that can occur during lexicon loading, article
//! fetching, extraction, and tabular I/O.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::{Result, TextGaugeError};
//!
//! fn require_heading(title: &str) -> Result<&str> {
//!     if title.is_empty() {
//!         return Err(TextGaugeError::ElementNotFound { selector: "h1.entry-title".into() });
//!     }
//!     Ok(title)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for article analysis operations.
///
/// Lexicon and tabular I/O errors are fatal startup conditions; fetch and
/// extraction errors are recoverable per row (the driver loop records them
/// and moves on to the next URL).
#[derive(Error, Debug)]
pub enum TextGaugeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A CSS selector in the extraction config failed to parse.
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// The page is missing its heading or content element.
    ///
    /// This is the "not found" condition of the content-fetch contract: a
    /// page without the expected heading or content container cannot be
    /// scored, so its row is skipped.
    #[error("No element matched selector '{selector}'")]
    ElementNotFound { selector: String },

    /// A stop-word or sentiment word list could not be read.
    ///
    /// Lexicon files are a startup precondition; there is no
    /// partial-lexicon fallback.
    #[error("Failed to read lexicon file {path}: {source}")]
    LexiconFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File I/O errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tabular input/output errors.
    ///
    /// Returned when the input CSV cannot be parsed or the output CSV
    /// cannot be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for TextGaugeError.
///
/// This is a convenience alias for `std::result::Result<T, TextGaugeError>`.
pub type Result<T> = std::result::Result<T, TextGaugeError>;
