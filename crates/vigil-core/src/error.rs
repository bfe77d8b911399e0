//! Error types for Vigil

use thiserror::Error;

/// Core Vigil errors
#[derive(Error, Debug)]
pub enum VigilError {
    // Location errors
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

/// Result type for Vigil operations
pub type VigilResult<T> = Result<T, VigilError>;
