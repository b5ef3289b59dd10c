//! Error types for the affinity core library.
//!
//! The relationship store itself never fails its caller: unknown names
//! degrade to defaults and are logged. Errors only surface from loading
//! configuration.

use thiserror::Error;

/// Top-level error type for fallible affinity operations.
#[derive(Error, Debug)]
pub enum AffinityError {
    /// Configuration could not be parsed or holds an invalid value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A roster lists the same character twice (case-insensitive).
    #[error("Duplicate character in roster: {0}")]
    DuplicateCharacter(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AffinityError>;
