//! Pluggable service resolution.
//!
//! The facade never hardwires load balancing: every call asks a
//! [`ServiceResolver`] for the concrete base URL to use, so discovery
//! strategies can be swapped without touching the client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use userlink_core::{UserlinkError, UserlinkResult};

use crate::endpoint::ServiceEndpoint;

/// Resolves a logical endpoint to a concrete base URL, once per call.
#[async_trait]
pub trait ServiceResolver: Send + Sync {
    /// Returns the base URL to use for a single remote call.
    async fn resolve(&self, endpoint: &ServiceEndpoint) -> UserlinkResult<String>;
}

/// Identity resolution: the endpoint already is the concrete base URL.
#[derive(Debug, Default)]
pub struct StaticResolver;

#[async_trait]
impl ServiceResolver for StaticResolver {
    async fn resolve(&self, endpoint: &ServiceEndpoint) -> UserlinkResult<String> {
        Ok(endpoint.as_str().trim_end_matches('/').to_string())
    }
}

/// In-memory instance registry with round-robin selection.
///
/// Instances are registered per logical service name; each resolution
/// rotates over the registered instances of the endpoint's service.
/// Safe for concurrent use.
#[derive(Debug, Default)]
pub struct RegistryResolver {
    instances: RwLock<HashMap<String, Vec<String>>>,
    cursor: AtomicUsize,
}

impl RegistryResolver {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instance base URL for a logical service.
    pub fn register(&self, service: impl Into<String>, base_url: impl Into<String>) {
        let service = service.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut instances = self.instances.write();
        let entries = instances.entry(service).or_default();
        if !entries.contains(&base_url) {
            entries.push(base_url);
        }
    }

    /// Removes an instance base URL from a logical service.
    pub fn deregister(&self, service: &str, base_url: &str) {
        let base_url = base_url.trim_end_matches('/');
        let mut instances = self.instances.write();
        if let Some(entries) = instances.get_mut(service) {
            entries.retain(|entry| entry != base_url);
            if entries.is_empty() {
                instances.remove(service);
            }
        }
    }

    /// Number of registered instances for a service.
    #[must_use]
    pub fn instance_count(&self, service: &str) -> usize {
        self.instances.read().get(service).map_or(0, Vec::len)
    }
}

#[async_trait]
impl ServiceResolver for RegistryResolver {
    async fn resolve(&self, endpoint: &ServiceEndpoint) -> UserlinkResult<String> {
        let service = endpoint.service_name();
        let instances = self.instances.read();
        let entries = instances
            .get(service)
            .filter(|entries| !entries.is_empty())
            .ok_or_else(|| {
                UserlinkError::resolution(service, "no registered instances")
            })?;

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % entries.len();
        let base_url = entries[index].clone();
        debug!(service, %base_url, "Resolved service instance");
        Ok(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_resolver_passes_endpoint_through() {
        let endpoint = ServiceEndpoint::new("http://localhost:8080/");
        let resolved = StaticResolver.resolve(&endpoint).await.expect("resolve");
        assert_eq!(resolved, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_registry_round_robin() {
        let registry = RegistryResolver::new();
        registry.register("user-service", "http://10.0.0.1:8080");
        registry.register("user-service", "http://10.0.0.2:8080");

        let endpoint = ServiceEndpoint::new("user-service");
        let first = registry.resolve(&endpoint).await.expect("resolve");
        let second = registry.resolve(&endpoint).await.expect("resolve");
        let third = registry.resolve(&endpoint).await.expect("resolve");

        assert_ne!(first, second);
        assert_eq!(first, third);
    }

    #[tokio::test]
    async fn test_registry_unknown_service_fails() {
        let registry = RegistryResolver::new();
        let endpoint = ServiceEndpoint::new("user-service");

        let err = registry.resolve(&endpoint).await.expect_err("must fail");
        assert_eq!(err.error_code(), "RESOLUTION_ERROR");
    }

    #[tokio::test]
    async fn test_registry_deregister_removes_instance() {
        let registry = RegistryResolver::new();
        registry.register("user-service", "http://10.0.0.1:8080");
        registry.register("user-service", "http://10.0.0.2:8080");
        registry.deregister("user-service", "http://10.0.0.1:8080");

        assert_eq!(registry.instance_count("user-service"), 1);

        let endpoint = ServiceEndpoint::new("user-service");
        let resolved = registry.resolve(&endpoint).await.expect("resolve");
        assert_eq!(resolved, "http://10.0.0.2:8080");
    }

    #[test]
    fn test_register_deduplicates() {
        let registry = RegistryResolver::new();
        registry.register("user-service", "http://10.0.0.1:8080");
        registry.register("user-service", "http://10.0.0.1:8080/");

        assert_eq!(registry.instance_count("user-service"), 1);
    }
}
