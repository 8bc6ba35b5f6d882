//! # Leader Ack Codec
//!
//! Acknowledgment messages a leader broadcasts after placing a work item
//! into its processing list, plus the follower-side intake that admits them.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Message, wire codec and classification, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-memory key directory
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - Every received ack must be verified against the leader's registered key
//!   before it is acted upon. [`AckIntake`] enforces this by default.
//! - Decoding is strict: unknown ack types, over-long strings and trailing
//!   bytes are rejected, so one message has exactly one encoding.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::StaticKeyDirectory;
pub use config::{ConfigError, IntakeConfig};
pub use domain::ack_type::{AckClass, AckType, MINUTES_PER_BLOCK};
pub use domain::builder::AckBuilder;
pub use domain::dedup::SeenAckCache;
pub use domain::errors::{AckError, AckResult};
pub use domain::message::{AckMessage, CMD_ACK, PROTOCOL_VERSION};
pub use domain::wire::{
    WireReader, WireWriter, FIXED_PAYLOAD_LEN, MAX_PAYLOAD_LEN, MAX_SHORT_STRING_LEN,
    MIN_PAYLOAD_LEN,
};
pub use ports::inbound::{AckIntakeApi, WireMessage};
pub use ports::outbound::KeyDirectory;
pub use service::{encode_signed, AckIntake, IntakeOutcome, IntakeStats};
