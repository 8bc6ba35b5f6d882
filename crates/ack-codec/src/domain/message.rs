//! # Ack Message
//!
//! The acknowledgment a leader broadcasts after accepting a work item into
//! its processing list, and its byte-exact codec.
//!
//! ## Identity
//!
//! - `affirmation` identifies the acknowledged object.
//! - [`AckMessage::sha`] identifies the ack itself: SHA-256 over the full
//!   encoded form, signature included. Used for deduplication and logging.
//!
//! ## Authenticity
//!
//! The signature covers [`AckMessage::signable_bytes`], which is the wire
//! layout minus the 64-byte signature. Followers MUST call
//! [`AckMessage::verify_with`] before acting on a received ack.

use super::ack_type::{AckClass, AckType};
use super::builder::AckBuilder;
use super::errors::{AckError, AckResult};
use super::wire::{
    WireReader, WireWriter, FIXED_PAYLOAD_LEN, MAX_PAYLOAD_LEN, MIN_PAYLOAD_LEN,
};
use crate::ports::inbound::WireMessage;
use crate::ports::outbound::KeyDirectory;
use shared_crypto::{sha256, Ed25519Signature, MessageSigner, MessageVerifier};
use shared_types::{ChainId, Hash, Hash32};
use std::fmt;
use std::io::{Read, Write};

/// Command string identifying acks within the multi-message protocol.
pub const CMD_ACK: &str = "ack";

/// Current protocol version. Accepted by encode/decode and otherwise unused.
pub const PROTOCOL_VERSION: u32 = 1;

/// Leader acknowledgment for one processing-list entry.
///
/// Equality compares every field, signature included, and never
/// re-verifies the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckMessage {
    /// Block height the ack pertains to
    pub height: u32,
    /// Logical chain the ack belongs to
    pub chain_id: ChainId,
    /// Position of the item in the processing list at `height`
    pub index: u32,
    pub ack_type: AckType,
    /// Leader timestamp for the directory block
    pub dblock_timestamp: u32,
    /// Leader timestamp (milliseconds) for the coinbase
    pub coinbase_timestamp: u64,
    /// Hash of the acknowledged object
    pub affirmation: Hash32,
    /// Links this ack to the previous one in sequence
    pub serial_hash: Hash,
    pub signature: Ed25519Signature,
    pub source_node_id: String,
    /// Source address for non-mesh topologies
    pub source_addr: String,
}

impl AckMessage {
    /// Build an ack with a zero chain identity placeholder.
    ///
    /// A missing `affirmation` becomes the zero hash. Use [`AckMessage::builder`]
    /// when the chain identity is known at construction time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        height: u32,
        index: u32,
        affirmation: Option<Hash32>,
        ack_type: AckType,
        dblock_timestamp: u32,
        coinbase_timestamp: u64,
        source_node_id: impl Into<String>,
        source_addr: impl Into<String>,
    ) -> Self {
        Self {
            height,
            chain_id: ChainId::zero(),
            index,
            ack_type,
            dblock_timestamp,
            coinbase_timestamp,
            affirmation: affirmation.unwrap_or_else(Hash32::zero),
            serial_hash: [0u8; 32],
            signature: Ed25519Signature::empty(),
            source_node_id: source_node_id.into(),
            source_addr: source_addr.into(),
        }
    }

    /// Start a two-phase construction that requires a chain identity.
    pub fn builder(height: u32, index: u32, ack_type: AckType) -> AckBuilder {
        AckBuilder::new(height, index, ack_type)
    }

    /// Write every field that precedes the signature.
    fn write_header(&self, w: &mut WireWriter) {
        w.put_u32_be(self.height)
            .put_bytes(&self.chain_id.marshal_binary())
            .put_u32_be(self.index)
            .put_u8(self.ack_type.as_u8())
            .put_u32_be(self.dblock_timestamp)
            .put_u64_be(self.coinbase_timestamp)
            .put_bytes(self.affirmation.as_bytes())
            .put_bytes(&self.serial_hash);
    }

    fn write_trailer(&self, w: &mut WireWriter) -> AckResult<()> {
        w.put_short_string("source_node_id", &self.source_node_id)?;
        w.put_short_string("source_addr", &self.source_addr)?;
        Ok(())
    }

    /// Bytes covered by the signature: the wire layout without the signature.
    pub fn signable_bytes(&self) -> AckResult<Vec<u8>> {
        let mut w = WireWriter::with_capacity(self.encoded_len() - 64);
        self.write_header(&mut w);
        self.write_trailer(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Sign the ack, replacing any previous signature.
    pub fn sign<S: MessageSigner + ?Sized>(&mut self, signer: &S) -> AckResult<()> {
        let payload = self.signable_bytes()?;
        self.signature = signer.sign_message(&payload)?;
        tracing::debug!(
            height = self.height,
            index = self.index,
            ack_type = %self.ack_type,
            source = %self.source_node_id,
            "ack signed"
        );
        Ok(())
    }

    /// True once a signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Verify the signature against a known public key.
    pub fn verify<V: MessageVerifier + ?Sized>(&self, key: &V) -> AckResult<()> {
        if !self.is_signed() {
            return Err(AckError::Unsigned);
        }
        let payload = self.signable_bytes()?;
        key.verify_message(&payload, &self.signature)
            .map_err(|_| AckError::InvalidSignature {
                source_node: self.source_node_id.clone(),
            })
    }

    /// Verify the signature against the key registered for `source_node_id`.
    pub fn verify_with<K: KeyDirectory + ?Sized>(&self, directory: &K) -> AckResult<()> {
        let key = directory
            .public_key_for(&self.source_node_id)
            .ok_or_else(|| AckError::UnknownSource(self.source_node_id.clone()))?;
        self.verify(&key)
    }

    /// Encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        FIXED_PAYLOAD_LEN + 2 + self.source_node_id.len() + self.source_addr.len()
    }

    /// Serialize to the wire format.
    pub fn encode(&self, _pver: u32) -> AckResult<Vec<u8>> {
        let mut w = WireWriter::with_capacity(self.encoded_len());
        self.write_header(&mut w);
        w.put_bytes(self.signature.as_bytes());
        self.write_trailer(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Serialize into a byte sink. Nothing is written if encoding fails.
    pub fn encode_to<W: Write + ?Sized>(&self, sink: &mut W, pver: u32) -> AckResult<usize> {
        let bytes = self.encode(pver)?;
        sink.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Parse one ack that occupies all of `data`.
    pub fn decode(data: &[u8], _pver: u32) -> AckResult<Self> {
        if data.len() > MAX_PAYLOAD_LEN {
            return Err(AckError::PayloadTooLarge {
                size: data.len(),
                limit: MAX_PAYLOAD_LEN,
            });
        }

        let mut r = WireReader::new(data);
        r.require(FIXED_PAYLOAD_LEN)?;

        let height = r.read_u32_be()?;
        let chain_id = r.read_hash32()?;
        let index = r.read_u32_be()?;
        let ack_type = AckType::try_from(r.read_u8()?)?;
        let dblock_timestamp = r.read_u32_be()?;
        let coinbase_timestamp = r.read_u64_be()?;
        let affirmation = r.read_hash32()?;
        let serial_hash = r.read_array::<32>()?;
        let signature = Ed25519Signature::from_bytes(r.read_array::<64>()?);
        let source_node_id = r.read_short_string("source_node_id")?;
        let source_addr = r.read_short_string("source_addr")?;
        r.finish()?;

        Ok(Self {
            height,
            chain_id,
            index,
            ack_type,
            dblock_timestamp,
            coinbase_timestamp,
            affirmation,
            serial_hash,
            signature,
            source_node_id,
            source_addr,
        })
    }

    /// Read an ack from a byte source until end of stream.
    ///
    /// At most one byte past [`MAX_PAYLOAD_LEN`] is read before an oversized
    /// stream is rejected.
    pub fn decode_from<R: Read + ?Sized>(source: &mut R, pver: u32) -> AckResult<Self> {
        let mut data = Vec::with_capacity(MIN_PAYLOAD_LEN);
        source
            .take(MAX_PAYLOAD_LEN as u64 + 1)
            .read_to_end(&mut data)?;
        Self::decode(&data, pver)
    }

    /// Content hash of the encoded message.
    pub fn sha(&self) -> AckResult<Hash32> {
        let bytes = self.encode(PROTOCOL_VERSION)?;
        Ok(Hash32::from_bytes(sha256(&bytes)))
    }

    /// True for minute-boundary acks.
    pub fn is_eom_ack(&self) -> bool {
        self.ack_type.is_end_of_minute()
    }

    pub fn classify(&self) -> AckClass {
        AckClass::of(self.ack_type)
    }
}

impl WireMessage for AckMessage {
    fn command(&self) -> &'static str {
        CMD_ACK
    }

    fn max_payload_length(&self, _pver: u32) -> usize {
        MAX_PAYLOAD_LEN
    }

    fn msg_encode(&self, sink: &mut dyn Write, pver: u32) -> AckResult<()> {
        self.encode_to(sink, pver).map(|_| ())
    }

    fn msg_decode(source: &mut dyn Read, pver: u32) -> AckResult<Self> {
        Self::decode_from(source, pver)
    }
}

impl fmt::Display for AckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ack(h={}, idx={}, type={}, from={} [{}])",
            self.height, self.index, self.ack_type, self.source_node_id, self.source_addr
        )
    }
}
