//! # Exploit Simulations
//!
//! Adversarial inputs a follower must survive: forged signatures,
//! impersonated leaders, replays and hostile framing.

pub mod forged_acks;
