//! Result type alias for Userlink operations.

use crate::UserlinkError;

/// A specialized `Result` type for Userlink operations.
pub type UserlinkResult<T> = Result<T, UserlinkError>;
