//! Client configuration structures.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::UserServiceClient`].
///
/// Carries the logical service URL, an optional static instance list
/// (which feeds a registry resolver), and connection-pool tuning.
/// There are deliberately no retry or timeout knobs: resilience lives
/// in the surrounding infrastructure, not in this facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserServiceConfig {
    /// Logical service URL or name, e.g. `user-service` or
    /// `http://users.internal:8080`.
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Static instance base URLs for the logical service. When non-empty,
    /// the client load-balances over these via a registry resolver.
    #[serde(default)]
    pub instances: Vec<String>,

    /// Maximum idle connections kept per host.
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,

    /// Idle connection lifetime in seconds.
    #[serde(default = "default_pool_idle_timeout_secs")]
    pub pool_idle_timeout_secs: u64,
}

fn default_service_url() -> String {
    "user-service".to_string()
}

fn default_pool_max_idle_per_host() -> usize {
    100
}

fn default_pool_idle_timeout_secs() -> u64 {
    90
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            instances: Vec::new(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
        }
    }
}
