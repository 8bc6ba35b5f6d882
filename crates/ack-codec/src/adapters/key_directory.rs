//! Key directory adapter
//!
//! Implements the KeyDirectory port over an in-memory map of leader keys.

use crate::ports::outbound::KeyDirectory;
use shared_crypto::Ed25519PublicKey;
use std::collections::HashMap;

/// In-memory node id → public key map.
pub struct StaticKeyDirectory {
    keys: parking_lot::RwLock<HashMap<String, Ed25519PublicKey>>,
}

impl StaticKeyDirectory {
    pub fn new() -> Self {
        Self {
            keys: parking_lot::RwLock::new(HashMap::new()),
        }
    }

    /// Register or replace the key for `node_id`. Returns the previous key.
    pub fn register(
        &self,
        node_id: impl Into<String>,
        key: Ed25519PublicKey,
    ) -> Option<Ed25519PublicKey> {
        let node_id = node_id.into();
        tracing::debug!(node_id = %node_id, "leader key registered");
        self.keys.write().insert(node_id, key)
    }

    pub fn remove(&self, node_id: &str) -> Option<Ed25519PublicKey> {
        self.keys.write().remove(node_id)
    }

    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}

impl Default for StaticKeyDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Ed25519PublicKey)> for StaticKeyDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Ed25519PublicKey)>>(iter: I) -> Self {
        Self {
            keys: parking_lot::RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl KeyDirectory for StaticKeyDirectory {
    fn public_key_for(&self, node_id: &str) -> Option<Ed25519PublicKey> {
        self.keys.read().get(node_id).copied()
    }
}
