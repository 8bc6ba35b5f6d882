//! # Adapters Module
//!
//! Infrastructure adapters implementing the ports.

pub mod key_directory;

pub use key_directory::StaticKeyDirectory;
