//! # Leader-Ack Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/         # Forged, replayed and malformed acks
//! └── integration/      # Leader → follower flows across crates
//! tests/benches/        # Codec and signature throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ack-tests
//!
//! # By category
//! cargo test -p ack-tests integration::
//! cargo test -p ack-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p ack-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod exploits;
pub mod integration;
