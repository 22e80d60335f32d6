//! Unified error types for the Userlink client.

use thiserror::Error;

/// Unified error type for all Userlink client operations.
///
/// Covers the domain not-found contract plus the transport, resolution,
/// and deserialization failures that propagate through the facade.
#[derive(Error, Debug)]
pub enum UserlinkError {
    // ============ Domain Errors ============
    /// No user exists for the requested number.
    #[error("User not found: {number}")]
    UserNotFound { number: String },

    // ============ Infrastructure Errors ============
    /// The resolver could not produce a concrete address for a service.
    #[error("Service resolution failed for {service}: {message}")]
    Resolution { service: String, message: String },

    /// The HTTP call itself failed (connect, I/O, protocol).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote answered with a status this layer does not absorb.
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    // ============ Internal Errors ============
    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserlinkError {
    /// Creates the domain not-found error for a user number.
    #[must_use]
    pub fn user_not_found<T: Into<String>>(number: T) -> Self {
        Self::UserNotFound {
            number: number.into(),
        }
    }

    /// Creates a resolution error.
    #[must_use]
    pub fn resolution<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::Resolution {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::Resolution { .. } => "RESOLUTION_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Deserialize(_) => "DESERIALIZE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Checks if this error is the domain not-found signal.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// The user number carried by a not-found error, if any.
    #[must_use]
    pub fn not_found_number(&self) -> Option<&str> {
        match self {
            Self::UserNotFound { number } => Some(number),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for UserlinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}
