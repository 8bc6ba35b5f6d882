//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this crate needs.

use shared_crypto::Ed25519PublicKey;
use std::sync::Arc;

/// Lookup of the public key a node signs its acks with.
///
/// Key management (rotation, distribution) lives outside this crate.
pub trait KeyDirectory: Send + Sync {
    /// Public key registered for `node_id`, if any.
    fn public_key_for(&self, node_id: &str) -> Option<Ed25519PublicKey>;
}

impl<K: KeyDirectory + ?Sized> KeyDirectory for Arc<K> {
    fn public_key_for(&self, node_id: &str) -> Option<Ed25519PublicKey> {
        (**self).public_key_for(node_id)
    }
}
