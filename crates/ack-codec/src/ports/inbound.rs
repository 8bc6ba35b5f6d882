//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this crate.

use crate::domain::errors::AckResult;
use crate::service::IntakeOutcome;
use std::io::{Read, Write};

/// A message within the multi-message wire protocol.
///
/// The surrounding dispatch layer reads a command string, looks up the
/// matching type and delegates the payload to `msg_decode`.
pub trait WireMessage {
    /// Protocol command string for this message type.
    fn command(&self) -> &'static str;

    /// Largest payload a receiver should accept for this message type.
    fn max_payload_length(&self, pver: u32) -> usize;

    /// Write the payload to a byte sink.
    fn msg_encode(&self, sink: &mut dyn Write, pver: u32) -> AckResult<()>;

    /// Read a payload from a byte source.
    fn msg_decode(source: &mut dyn Read, pver: u32) -> AckResult<Self>
    where
        Self: Sized;
}

/// Follower-side entry point for received ack bytes.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AckIntakeApi: Send + Sync {
    /// Decode, authenticate and deduplicate one received ack.
    ///
    /// # Errors
    /// * Malformed input (`Truncated`, `UnknownAckType`, ...)
    /// * Authentication failures (`UnknownSource`, `Unsigned`, `InvalidSignature`)
    fn receive(&self, payload: &[u8]) -> AckResult<IntakeOutcome>;
}
