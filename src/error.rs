//! Error types for newsletter parsing

use thiserror::Error;

/// Errors that can occur while turning input into articles.
///
/// Malformed newsletter content is never an error: the segmenter just
/// yields fewer articles. These variants cover invalid input values and the
/// mail envelope around the text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input bytes are not valid UTF-8 text
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(String),

    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode a body part
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// The message has no text body to segment
    #[error("No text body found in email")]
    MissingBody,

    /// Invalid segmenter configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
