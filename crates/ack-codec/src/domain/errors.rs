//! # Ack Errors
//!
//! Error types for construction, encoding, decoding and verification of
//! acknowledgment messages. Every failure is reported; nothing is retried here.

use shared_crypto::CryptoError;
use shared_types::IdentifierError;
use thiserror::Error;

/// Errors that can occur while handling an acknowledgment.
#[derive(Debug, Error)]
pub enum AckError {
    /// The input ended before a field could be read.
    #[error("Truncated ack: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// Payload is larger than any valid ack.
    #[error("Ack payload too large: {size} bytes > {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Bytes were left over after the last field.
    #[error("Trailing bytes after ack: {0}")]
    TrailingBytes(usize),

    /// The type byte is not a wire-level ack type.
    #[error("Unknown ack type: {0}")]
    UnknownAckType(u8),

    /// A length-prefixed string does not fit in one prefix byte.
    #[error("Field {field} too long: {len} bytes > 255")]
    StringTooLong { field: &'static str, len: usize },

    /// A string field was not UTF-8.
    #[error("Field {field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    /// A field required for signing was never supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Identifier could not be parsed.
    #[error("Invalid identifier: {0}")]
    Identifier(#[from] IdentifierError),

    /// The signing primitive failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] CryptoError),

    /// No public key is registered for the ack's source node.
    #[error("Unknown ack source: {0:?}")]
    UnknownSource(String),

    /// The ack carries no signature.
    #[error("Ack is unsigned")]
    Unsigned,

    /// The signature does not match the signable prefix.
    #[error("Invalid ack signature from {source_node:?}")]
    InvalidSignature { source_node: String },

    /// Reading from or writing to the byte stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AckError {
    /// True for errors caused by malformed bytes on the wire.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            AckError::Truncated { .. }
                | AckError::PayloadTooLarge { .. }
                | AckError::TrailingBytes(_)
                | AckError::UnknownAckType(_)
                | AckError::InvalidUtf8 { .. }
        )
    }

    /// True for authenticity failures.
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            AckError::UnknownSource(_) | AckError::Unsigned | AckError::InvalidSignature { .. }
        )
    }
}

/// Result type for ack operations
pub type AckResult<T> = Result<T, AckError>;
