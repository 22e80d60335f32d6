//! HTTP facade over the remote user microservice.
//!
//! Hides the remote service behind three lookup operations. Each call
//! resolves the logical endpoint through the injected resolver, issues
//! one GET, and maps the response per the facade's contract: soft
//! misses come back as `None`, while `get_by_number` turns the same
//! miss into a typed not-found error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use userlink_core::{User, UserlinkError, UserlinkResult};

use crate::config::UserServiceConfig;
use crate::endpoint::ServiceEndpoint;
use crate::resolver::{RegistryResolver, ServiceResolver, StaticResolver};

/// Client facade for the remote user microservice.
///
/// Stateless per call: the only instance state is the normalized
/// endpoint and the injected resolver, both fixed at construction.
/// Safe to share across tasks behind an `Arc`.
pub struct UserServiceClient {
    http: Client,
    endpoint: ServiceEndpoint,
    resolver: Arc<dyn ServiceResolver>,
}

impl UserServiceClient {
    /// Creates a client that treats the endpoint as the concrete address.
    pub fn new(endpoint: impl Into<ServiceEndpoint>) -> UserlinkResult<Self> {
        Self::with_resolver(endpoint, Arc::new(StaticResolver))
    }

    /// Creates a client with an injected resolution strategy.
    pub fn with_resolver(
        endpoint: impl Into<ServiceEndpoint>,
        resolver: Arc<dyn ServiceResolver>,
    ) -> UserlinkResult<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| UserlinkError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(http, endpoint, resolver))
    }

    /// Creates a client from a caller-supplied transport.
    pub fn with_client(
        http: Client,
        endpoint: impl Into<ServiceEndpoint>,
        resolver: Arc<dyn ServiceResolver>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            resolver,
        }
    }

    /// Creates a client from configuration. A non-empty instance list
    /// switches resolution to a round-robin registry over those
    /// instances; otherwise the service URL is used directly.
    pub fn from_config(config: &UserServiceConfig) -> UserlinkResult<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .build()
            .map_err(|e| UserlinkError::internal(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = ServiceEndpoint::new(config.service_url.clone());
        let resolver: Arc<dyn ServiceResolver> = if config.instances.is_empty() {
            Arc::new(StaticResolver)
        } else {
            let registry = RegistryResolver::new();
            for instance in &config.instances {
                registry.register(endpoint.service_name(), instance.clone());
            }
            Arc::new(registry)
        };

        Ok(Self::with_client(http, endpoint, resolver))
    }

    /// The normalized logical endpoint this client was built with.
    #[must_use]
    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Looks up a user by number, treating a missing record as a soft
    /// miss: an empty or `null` response body yields `Ok(None)`.
    pub async fn find_by_number(&self, number: &str) -> UserlinkResult<Option<User>> {
        info!("find_by_number invoked: {}", number);

        self.fetch_user(number).await
    }

    /// Searches for users whose owner name contains the given substring.
    ///
    /// A client-error status from the remote means "nothing found" and is
    /// absorbed. An empty result, in any of its remote spellings (empty
    /// body, `null`, `[]`), yields `Ok(None)`; otherwise the users come
    /// back in exactly the order the remote returned them.
    pub async fn find_all_by_owner_contains(
        &self,
        name: &str,
    ) -> UserlinkResult<Option<Vec<User>>> {
        info!("find_all_by_owner_contains invoked: {}", name);

        let base = self.resolver.resolve(&self.endpoint).await?;
        let response = self
            .http
            .get(format!("{}/user/owner/{}", base, name))
            .send()
            .await
            .map_err(|e| UserlinkError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            // Nothing found
            debug!("owner search for {} answered {}", name, status);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(upstream_error(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| UserlinkError::transport(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let users: Option<Vec<User>> = serde_json::from_str(body.trim())?;
        Ok(users.filter(|users| !users.is_empty()))
    }

    /// Looks up a user by number, raising [`UserlinkError::UserNotFound`]
    /// where [`Self::find_by_number`] would return `Ok(None)`.
    pub async fn get_by_number(&self, number: &str) -> UserlinkResult<User> {
        info!("get_by_number invoked: {}", number);

        self.fetch_user(number)
            .await?
            .ok_or_else(|| UserlinkError::user_not_found(number))
    }

    async fn fetch_user(&self, number: &str) -> UserlinkResult<Option<User>> {
        let base = self.resolver.resolve(&self.endpoint).await?;
        let response = self
            .http
            .get(format!("{}/user/{}", base, number))
            .send()
            .await
            .map_err(|e| UserlinkError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| UserlinkError::transport(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let user: Option<User> = serde_json::from_str(body.trim())?;
        Ok(user)
    }
}

async fn upstream_error(response: reqwest::Response) -> UserlinkError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    UserlinkError::Upstream {
        status: status.as_u16(),
        message,
    }
}
