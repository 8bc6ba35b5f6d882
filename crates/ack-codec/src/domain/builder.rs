//! Two-phase construction of acks whose chain identity must be known up front.

use super::ack_type::AckType;
use super::errors::{AckError, AckResult};
use super::message::AckMessage;
use super::wire::check_short_string;
use shared_crypto::{Ed25519Signature, MessageSigner};
use shared_types::{ChainId, Hash, Hash32};

/// Collects ack fields and refuses to produce a message without a chain id.
#[derive(Debug, Clone)]
pub struct AckBuilder {
    height: u32,
    index: u32,
    ack_type: AckType,
    chain_id: Option<ChainId>,
    affirmation: Option<Hash32>,
    serial_hash: Hash,
    dblock_timestamp: u32,
    coinbase_timestamp: u64,
    source_node_id: String,
    source_addr: String,
}

impl AckBuilder {
    pub fn new(height: u32, index: u32, ack_type: AckType) -> Self {
        Self {
            height,
            index,
            ack_type,
            chain_id: None,
            affirmation: None,
            serial_hash: [0u8; 32],
            dblock_timestamp: 0,
            coinbase_timestamp: 0,
            source_node_id: String::new(),
            source_addr: String::new(),
        }
    }

    pub fn chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn affirmation(mut self, affirmation: Hash32) -> Self {
        self.affirmation = Some(affirmation);
        self
    }

    pub fn serial_hash(mut self, serial_hash: Hash) -> Self {
        self.serial_hash = serial_hash;
        self
    }

    pub fn dblock_timestamp(mut self, timestamp: u32) -> Self {
        self.dblock_timestamp = timestamp;
        self
    }

    pub fn coinbase_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.coinbase_timestamp = timestamp_ms;
        self
    }

    pub fn source_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.source_node_id = node_id.into();
        self
    }

    pub fn source_addr(mut self, addr: impl Into<String>) -> Self {
        self.source_addr = addr.into();
        self
    }

    /// Produce an unsigned ack.
    ///
    /// # Errors
    ///
    /// - `MissingField("chain_id")` if no chain identity was supplied
    /// - `StringTooLong` if either source string exceeds 255 bytes
    pub fn build(self) -> AckResult<AckMessage> {
        let chain_id = self.chain_id.ok_or(AckError::MissingField("chain_id"))?;
        check_short_string("source_node_id", &self.source_node_id)?;
        check_short_string("source_addr", &self.source_addr)?;

        Ok(AckMessage {
            height: self.height,
            chain_id,
            index: self.index,
            ack_type: self.ack_type,
            dblock_timestamp: self.dblock_timestamp,
            coinbase_timestamp: self.coinbase_timestamp,
            affirmation: self.affirmation.unwrap_or_else(Hash32::zero),
            serial_hash: self.serial_hash,
            signature: Ed25519Signature::empty(),
            source_node_id: self.source_node_id,
            source_addr: self.source_addr,
        })
    }

    /// Produce a signed ack ready for transmission.
    pub fn build_signed<S: MessageSigner + ?Sized>(self, signer: &S) -> AckResult<AckMessage> {
        let mut ack = self.build()?;
        ack.sign(signer)?;
        Ok(ack)
    }
}
