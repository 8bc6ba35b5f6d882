//! # Core Value Types
//!
//! The 32-byte canonical identifier used for chain identities, affirmations
//! and message content hashes.

use crate::errors::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of every canonical identifier, in bytes.
pub const HASH32_LEN: usize = 32;

/// A raw 32-byte digest.
pub type Hash = [u8; HASH32_LEN];

/// A 32-byte canonical identifier.
///
/// The canonical binary form is the raw 32 bytes, most significant first, with
/// no length prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Hash32(Hash);

/// Identifies the logical chain an acknowledgment belongs to.
pub type ChainId = Hash32;

impl Hash32 {
    /// The all-zero identifier.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; HASH32_LEN])
    }

    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Hash) -> Self {
        Self(bytes)
    }

    /// Copy an identifier out of a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdentifierError> {
        let raw: Hash = bytes
            .try_into()
            .map_err(|_| IdentifierError::InvalidLength {
                expected: HASH32_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }

    /// Canonical binary form.
    #[must_use]
    pub fn marshal_binary(&self) -> Hash {
        self.0
    }

    /// Read an identifier from the head of `data`, returning the unread tail.
    pub fn unmarshal_binary_data(data: &[u8]) -> Result<(Self, &[u8]), IdentifierError> {
        if data.len() < HASH32_LEN {
            return Err(IdentifierError::InvalidLength {
                expected: HASH32_LEN,
                actual: data.len(),
            });
        }
        let (head, tail) = data.split_at(HASH32_LEN);
        Ok((Self::from_slice(head)?, tail))
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// True for the placeholder value produced by [`Hash32::zero`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<Hash> for Hash32 {
    fn from(bytes: Hash) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32({})", hex::encode(self.0))
    }
}

impl FromStr for Hash32 {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| IdentifierError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}
