//! # Error Types
//!
//! Defines error types for shared value types.

use thiserror::Error;

/// Errors raised while building or unmarshalling identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Input did not have the identifier's fixed width.
    #[error("Invalid identifier length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input was not valid hexadecimal.
    #[error("Invalid hex identifier: {0}")]
    InvalidHex(String),
}
