//! # Ack Telemetry
//!
//! Logging setup shared by leader and follower processes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ack_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_role("leader");
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `leader-ack` | Service name in log lines |
//! | `ACK_ROLE` | `follower` | Node role |
//! | `ACK_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `ACK_JSON_LOGS` | `false` | JSON output |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL};
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
