//! Error types for the Bookshelf plugin.
//!
//! [`BookshelfError`] is the single error type of the crate and [`Result`] is
//! the matching alias. The library operations themselves are infallible; these
//! errors come from the add-book form, theme loading and configuration.

use thiserror::Error;

/// The main error type for Bookshelf operations.
///
/// # Examples
///
/// ```
/// use bookshelf::BookshelfError;
///
/// let err = BookshelfError::Validation("All fields are required!".to_string());
/// assert_eq!(err.to_string(), "All fields are required!");
/// ```
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Form input was rejected.
    ///
    /// The message is shown to the user verbatim, so it carries no prefix.
    #[error("{0}")]
    Validation(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;
