//! Error types for the application

use thiserror::Error;

/// Application-wide error type
///
/// Price estimation itself never fails; these cover loading and saving the
/// configuration and preference files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
