//! # Ack Intake Service
//!
//! Application service for the follower side of the ack flow.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`AckIntakeApi`)
//! - Uses the outbound port (`KeyDirectory`) to authenticate the leader
//! - Delegates decoding, hashing and verification to the domain layer
//!
//! ## Intake Pipeline
//!
//! ```text
//! bytes ──decode──→ AckMessage ──sha256──→ seen? ──yes──→ Duplicate
//!                                            │
//!                                            no
//!                                            ↓
//!                                  verify against directory ──fail──→ Err
//!                                            ↓
//!                                         Accepted
//! ```

use crate::config::IntakeConfig;
use crate::domain::dedup::SeenAckCache;
use crate::domain::errors::AckResult;
use crate::domain::message::AckMessage;
use crate::ports::inbound::AckIntakeApi;
use crate::ports::outbound::KeyDirectory;
use ack_telemetry::log_ack_event;
use parking_lot::Mutex;
use shared_crypto::{sha256, MessageSigner};
use shared_types::Hash32;
use std::sync::atomic::{AtomicU64, Ordering};

/// Result of handing one payload to the intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// First sighting of an authentic ack.
    Accepted { ack: AckMessage, hash: Hash32 },
    /// The same encoded ack was already accepted.
    Duplicate(Hash32),
}

impl IntakeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, IntakeOutcome::Accepted { .. })
    }

    pub fn hash(&self) -> Hash32 {
        match self {
            IntakeOutcome::Accepted { hash, .. } | IntakeOutcome::Duplicate(hash) => *hash,
        }
    }
}

/// Snapshot of intake counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeStats {
    pub accepted: u64,
    pub duplicates: u64,
    pub rejected: u64,
}

#[derive(Default)]
struct Counters {
    accepted: AtomicU64,
    duplicates: AtomicU64,
    rejected: AtomicU64,
}

/// Follower intake: decode, deduplicate and authenticate received acks.
pub struct AckIntake<K: KeyDirectory> {
    directory: K,
    config: IntakeConfig,
    seen: Mutex<SeenAckCache>,
    counters: Counters,
}

impl<K: KeyDirectory> AckIntake<K> {
    /// Create a new intake service.
    ///
    /// # Arguments
    /// * `directory` - Source of leader public keys
    /// * `config` - Intake configuration
    pub fn new(directory: K, config: IntakeConfig) -> Self {
        let seen = Mutex::new(SeenAckCache::with_capacity(config.dedup_capacity));
        Self {
            directory,
            config,
            seen,
            counters: Counters::default(),
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn directory(&self) -> &K {
        &self.directory
    }

    pub fn stats(&self) -> IntakeStats {
        IntakeStats {
            accepted: self.counters.accepted.load(Ordering::Relaxed),
            duplicates: self.counters.duplicates.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
        }
    }

    fn admit(&self, payload: &[u8]) -> AckResult<IntakeOutcome> {
        let ack = AckMessage::decode(payload, self.config.protocol_version)?;

        // Decoding is strict, so the payload is the canonical encoding and
        // hashing it equals `ack.sha()`.
        let hash = Hash32::from_bytes(sha256(payload));

        if self.seen.lock().contains(&hash) {
            return Ok(IntakeOutcome::Duplicate(hash));
        }

        if self.config.require_signature {
            ack.verify_with(&self.directory)?;
        }

        if !self.seen.lock().insert(hash) {
            // Lost a race with a concurrent receive of the same bytes
            return Ok(IntakeOutcome::Duplicate(hash));
        }

        Ok(IntakeOutcome::Accepted { ack, hash })
    }
}

impl<K: KeyDirectory> AckIntakeApi for AckIntake<K> {
    fn receive(&self, payload: &[u8]) -> AckResult<IntakeOutcome> {
        match self.admit(payload) {
            Ok(IntakeOutcome::Accepted { ack, hash }) => {
                self.counters.accepted.fetch_add(1, Ordering::Relaxed);
                log_ack_event!(
                    debug,
                    "ack accepted",
                    ack.height,
                    ack.index,
                    ack.source_node_id,
                    ack_type = %ack.ack_type,
                    hash = %hash
                );
                Ok(IntakeOutcome::Accepted { ack, hash })
            }
            Ok(IntakeOutcome::Duplicate(hash)) => {
                self.counters.duplicates.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(hash = %hash, "duplicate ack dropped");
                Ok(IntakeOutcome::Duplicate(hash))
            }
            Err(e) => {
                self.counters.rejected.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    error = %e,
                    payload_len = payload.len(),
                    malformed = e.is_malformed(),
                    "ack rejected"
                );
                Err(e)
            }
        }
    }
}

/// Sign `ack` and encode it for the transport. The leader-side send path.
pub fn encode_signed<S: MessageSigner + ?Sized>(
    ack: &mut AckMessage,
    signer: &S,
    pver: u32,
) -> AckResult<Vec<u8>> {
    ack.sign(signer)?;
    let bytes = ack.encode(pver)?;
    log_ack_event!(
        debug,
        "ack encoded",
        ack.height,
        ack.index,
        ack.source_node_id,
        len = bytes.len()
    );
    Ok(bytes)
}
