//! # Domain Layer
//!
//! Pure codec, identity and signing logic with no I/O of its own.
//! This is the inner layer of the hexagonal architecture.

pub mod ack_type;
pub mod builder;
pub mod dedup;
pub mod errors;
pub mod message;
pub mod wire;
