//! # Ed25519 Signatures
//!
//! Leaders sign acknowledgments with Ed25519; followers verify them against
//! the public key registered for the leader's node identifier.
//!
//! The [`MessageSigner`] and [`MessageVerifier`] traits are the seams the
//! codec depends on, so callers can plug in an HSM or remote signer.

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use zeroize::Zeroize;

/// Width of a detached signature, in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Width of a secret seed, in bytes.
pub const SEED_LEN: usize = 32;

/// Produces detached signatures over arbitrary byte strings.
pub trait MessageSigner {
    /// Sign `message`.
    fn sign_message(&self, message: &[u8]) -> Result<Ed25519Signature, CryptoError>;

    /// Public half of the signing key.
    fn public_key(&self) -> Ed25519PublicKey;
}

/// Checks detached signatures.
pub trait MessageVerifier {
    /// Verify `signature` over `message`.
    fn verify_message(&self, message: &[u8], signature: &Ed25519Signature)
        -> Result<(), CryptoError>;
}

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        // Reject encodings that are not a curve point
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl MessageVerifier for Ed25519PublicKey {
    fn verify_message(
        &self,
        message: &[u8],
        signature: &Ed25519Signature,
    ) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        verifying_key
            .verify_strict(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ed25519Signature([u8; SIGNATURE_LEN]);

impl Ed25519Signature {
    /// The all-zero placeholder carried by unsigned messages.
    pub const fn empty() -> Self {
        Self([0u8; SIGNATURE_LEN])
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// True for the placeholder produced by [`Ed25519Signature::empty`].
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Default for Ed25519Signature {
    fn default() -> Self {
        Self::empty()
    }
}

/// Ed25519 keypair held by a leader.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret seed (32 bytes).
    pub fn from_seed(seed: [u8; SEED_LEN]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        Self { signing_key }
    }

    /// Create from an untrusted secret slice, e.g. one loaded from a key file.
    pub fn from_secret_slice(secret: &[u8]) -> Result<Self, CryptoError> {
        let mut seed: [u8; SEED_LEN] =
            secret
                .try_into()
                .map_err(|_| CryptoError::InvalidPrivateKey {
                    expected: SEED_LEN,
                    actual: secret.len(),
                })?;
        let keypair = Self::from_seed(seed);
        seed.zeroize();
        Ok(keypair)
    }

    /// Sign a message (deterministic - no RNG needed).
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Get secret seed (for serialization).
    pub fn to_seed(&self) -> [u8; SEED_LEN] {
        self.signing_key.to_bytes()
    }
}

impl MessageSigner for Ed25519KeyPair {
    fn sign_message(&self, message: &[u8]) -> Result<Ed25519Signature, CryptoError> {
        let sig = self
            .signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(Ed25519Signature(sig.to_bytes()))
    }

    fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }
}

impl Drop for Ed25519KeyPair {
    fn drop(&mut self) {
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}
