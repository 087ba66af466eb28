//! Error types for the fitplan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitplan_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization of a stored artifact failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Caller supplied an out-of-domain value (bad enum string, non-positive biometrics)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// User store error
    #[error("Store error: {0}")]
    Store(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
