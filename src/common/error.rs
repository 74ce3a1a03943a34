//! Error types for the PetFriends test client
//!
//! Remote-signaled errors (403 on bad credentials, 4xx on bad input) are NOT
//! represented here: they come back as an `ApiResponse` carrying the error
//! status, so scenarios can assert on the remote's exact behavior. This enum
//! covers everything that prevents a round trip from producing a response at
//! all, plus scenario preconditions that could not be met.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PetFriends test client
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read photo file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === Scenario Precondition Errors ===
    #[error("No pets available: the account owns no pets and creating one did not help")]
    NoPetsAvailable,
}

impl Error {
    /// Create a file read error for a photo path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
