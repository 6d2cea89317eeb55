//! Error types for the studcard-core library.

use thiserror::Error;

/// Main error type for the studcard library.
#[derive(Error, Debug)]
pub enum CardError {
    /// Document decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Student record extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error while reading the source or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning document bytes into metadata and text.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract the text layer.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to student record extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The course start line is not a valid `DD.MM.YYYY` date.
    #[error("malformed date {value:?}: {reason}")]
    MalformedDate { value: String, reason: String },

    /// The text layer has fewer lines than the card layout addresses.
    #[error("expected at least {required} non-empty lines, found {found}")]
    TooFewLines { required: usize, found: usize },
}

/// Result type for the studcard library.
pub type Result<T> = std::result::Result<T, CardError>;
