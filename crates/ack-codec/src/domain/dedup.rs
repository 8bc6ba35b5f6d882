//! # Bounded Seen-Ack Cache
//!
//! Remembers the content hashes of recently accepted acks so a follower
//! processes each ack once, even when it arrives from several peers.
//!
//! ## Bounds
//!
//! - At most `capacity` hashes are retained
//! - The oldest hash is evicted first (FIFO)

use shared_types::Hash32;
use std::collections::{HashSet, VecDeque};

/// FIFO-bounded set of ack content hashes.
#[derive(Debug)]
pub struct SeenAckCache {
    order: VecDeque<Hash32>,
    members: HashSet<Hash32>,
    capacity: usize,
}

impl SeenAckCache {
    /// Default number of hashes retained.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create a cache holding at most `capacity` hashes (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            order: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `hash`. Returns `false` if it was already present.
    pub fn insert(&mut self, hash: Hash32) -> bool {
        if !self.members.insert(hash) {
            return false;
        }
        self.order.push_back(hash);
        if self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.members.remove(&evicted);
            }
        }
        true
    }

    pub fn contains(&self, hash: &Hash32) -> bool {
        self.members.contains(hash)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SeenAckCache {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
