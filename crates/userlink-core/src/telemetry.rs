//! Tracing initialization for binaries and tests.
//!
//! The client itself only emits `tracing` events; installing a subscriber
//! is left to the embedding application. This module provides the console
//! setup used by tests and simple hosts.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::UserlinkResult;

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name reported in log output.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Whether to install a console output layer.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_service_name() -> String {
    "userlink".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            console_output: default_console_output(),
        }
    }
}

/// Initialize console tracing with the given configuration.
///
/// Respects `RUST_LOG` when set; falls back to `info` with debug output
/// for the userlink crates.
pub fn init_telemetry(config: &TelemetryConfig) -> UserlinkResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,userlink=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| crate::UserlinkError::Internal(format!("Failed to init tracing: {}", e)))?;

    tracing::info!(service_name = %config.service_name, "Telemetry initialized");

    Ok(())
}
