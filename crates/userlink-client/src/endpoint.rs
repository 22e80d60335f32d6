//! Logical service endpoint with scheme normalization.

use std::fmt;

const DEFAULT_SCHEME: &str = "http://";

/// Logical address of the remote service, either a plain service name
/// (`user-service`) or a full URL (`https://users.internal:8080`).
///
/// Normalized at construction: a string without a transport scheme gets
/// `http://` prefixed exactly once. Immutable once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint(String);

impl ServiceEndpoint {
    /// Creates an endpoint, prefixing the default scheme if missing.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self(raw)
        } else {
            Self(format!("{DEFAULT_SCHEME}{raw}"))
        }
    }

    /// The normalized URL-form endpoint.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The logical service name: the host portion after the scheme,
    /// up to the first path separator. Used as the registry key.
    #[must_use]
    pub fn service_name(&self) -> &str {
        let rest = self
            .0
            .strip_prefix("https://")
            .or_else(|| self.0.strip_prefix("http://"))
            .unwrap_or(&self.0);
        rest.split('/').next().unwrap_or(rest)
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceEndpoint {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ServiceEndpoint {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
