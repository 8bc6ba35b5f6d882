//! # Integration Tests
//!
//! Leader and follower wired together through the public crate APIs.
