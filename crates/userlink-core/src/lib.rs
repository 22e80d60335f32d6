//! # Userlink Core
//!
//! Core types and error definitions for the Userlink client.
//! This crate provides the user record, the error taxonomy, and the
//! result alias shared by the client-facing crates.

pub mod error;
pub mod result;
pub mod telemetry;
pub mod user;

pub use error::*;
pub use result::*;
pub use user::*;
