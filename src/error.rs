//! Error types for konko-markup.
//!
//! Rendering itself is total and never produces one of these; they cover the
//! fallible edges around it (configuration, file I/O, editor selections).

use thiserror::Error;

/// Result type for konko-markup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Editor selection does not address the active buffer.
    #[error("Invalid selection {start}..{end} for buffer of {len} bytes")]
    InvalidSelection {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Toolbar colour is not a `#rgb` or `#rrggbb` value.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
