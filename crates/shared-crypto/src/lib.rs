//! # Shared Crypto - Signing and Hashing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Message content hashes |
//! | `signatures` | Ed25519 | Leader acknowledgment signing |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency at signing time
//! - Secret seeds are zeroized when a keypair is dropped

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_many, Sha256Hasher};
pub use signatures::{
    Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, MessageSigner, MessageVerifier,
    SIGNATURE_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
