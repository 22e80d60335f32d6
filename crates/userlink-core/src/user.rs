//! User record as served by the remote user microservice.

use serde::{Deserialize, Serialize};

/// A user record owned by the remote service.
///
/// Treated as an immutable value object on the client side: constructed
/// fresh per response, never mutated, compared by its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user number.
    pub number: String,

    /// Name of the user's owner.
    pub owner: String,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(number: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            owner: owner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_remote_json() {
        let user: User = serde_json::from_str(r#"{"number":"U1","owner":"Alice"}"#)
            .expect("valid user JSON");
        assert_eq!(user.number, "U1");
        assert_eq!(user.owner, "Alice");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(User::new("U1", "Alice"), User::new("U1", "Alice"));
        assert_ne!(User::new("U1", "Alice"), User::new("U2", "Alice"));
    }
}
