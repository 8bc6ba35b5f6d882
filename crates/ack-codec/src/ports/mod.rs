//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the dispatch layer and followers use
//! - **Outbound (Driven)**: Dependencies this crate needs

pub mod inbound;
pub mod outbound;
