//! # Shared Types Crate
//!
//! Identifier types shared across the Leader-Ack workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Hash32` is the one canonical 32-byte
//!   identifier. Chain identities, affirmations and message hashes are all
//!   expressed with it.
//! - **Value Semantics**: identifiers are immutable `Copy` values. Cloning a
//!   message that holds them never aliases mutable state.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
