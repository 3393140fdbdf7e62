//! Error types for Aevum

use thiserror::Error;

/// Core Aevum errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AevumError {
    // Arithmetic errors
    #[error("Multiplication factor is NaN")]
    FactorNotANumber,

    #[error("Aeon magnitude overflow: {digits} digits exceeds maximum {max}")]
    AeonOverflow { digits: usize, max: usize },

    // Formatting errors
    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

/// Result type for Aevum operations
pub type AevumResult<T> = Result<T, AevumError>;
