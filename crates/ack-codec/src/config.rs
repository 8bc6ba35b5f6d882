//! Follower intake configuration from environment variables.

use crate::domain::dedup::SeenAckCache;
use crate::domain::message::PROTOCOL_VERSION;
use std::env;
use thiserror::Error;

/// Invalid intake configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("dedup_capacity must be at least 1")]
    ZeroDedupCapacity,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Configuration for [`crate::AckIntake`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Protocol version passed to the decoder
    pub protocol_version: u32,

    /// Number of recent ack hashes remembered for deduplication
    pub dedup_capacity: usize,

    /// Reject acks that fail signature verification.
    ///
    /// Only test harnesses should turn this off.
    pub require_signature: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            dedup_capacity: SeenAckCache::DEFAULT_CAPACITY,
            require_signature: true,
        }
    }
}

impl IntakeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ACK_PROTOCOL_VERSION`: Protocol version (default: 1)
    /// - `ACK_DEDUP_CAPACITY`: Dedup cache size (default: 4096)
    /// - `ACK_REQUIRE_SIGNATURE`: Enforce signatures (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            protocol_version: parse_var("ACK_PROTOCOL_VERSION")?
                .unwrap_or(defaults.protocol_version),
            dedup_capacity: parse_var("ACK_DEDUP_CAPACITY")?.unwrap_or(defaults.dedup_capacity),
            require_signature: match env::var("ACK_REQUIRE_SIGNATURE") {
                Ok(v) => parse_bool("ACK_REQUIRE_SIGNATURE", &v)?,
                Err(_) => defaults.require_signature,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dedup_capacity == 0 {
            return Err(ConfigError::ZeroDedupCapacity);
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}
