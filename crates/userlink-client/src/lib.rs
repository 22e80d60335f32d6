//! # Userlink Client
//!
//! Client-side facade over the remote user microservice. Lookups go
//! through an injected [`ServiceResolver`] that maps the logical service
//! endpoint to a concrete address before each call, so load balancing
//! and discovery stay pluggable.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod resolver;

pub use client::UserServiceClient;
pub use config::UserServiceConfig;
pub use endpoint::ServiceEndpoint;
pub use resolver::{RegistryResolver, ServiceResolver, StaticResolver};
