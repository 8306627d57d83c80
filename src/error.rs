//! Error types for the click-styling harness

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a page
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read a page from disk
    #[error("Failed to load page: {0}")]
    LoadError(String),

    /// The input contained no usable markup
    #[error("Failed to parse document: {0}")]
    ParseError(String),
}
