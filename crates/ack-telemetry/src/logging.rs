//! Structured logging setup.
//!
//! Log lines carry consistent fields so that acks can be correlated across
//! leader and follower logs:
//! - `height` / `index`: position in the processing list
//! - `ack_type`: wire tag of the acknowledgment
//! - `source`: node identifier of the leader that produced the ack
//! - `hash`: content hash of the encoded message

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber described by `config`.
///
/// Fails with [`TelemetryError::SubscriberInit`] when a global subscriber is
/// already installed, so callers that may run more than once (tests) can
/// ignore the error.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", config.log_level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match (config.console_output, config.json_logs) {
        (false, _) => registry.try_init(),
        (true, true) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        (true, false) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.full_service_name(),
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

/// Log an ack-related event with the standard fields.
///
/// ```rust,ignore
/// log_ack_event!(debug, "ack accepted", ack.height, ack.index, ack.source_node_id, hash = %id);
/// ```
#[macro_export]
macro_rules! log_ack_event {
    ($level:ident, $msg:expr, $height:expr, $index:expr, $source:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            height = $height,
            index = $index,
            source = %$source,
            $($($field)*,)?
            $msg
        )
    };
}
