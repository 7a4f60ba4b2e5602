//! User records stored in a [`SocialGraph`](crate::SocialGraph).

use serde::{Deserialize, Serialize};

/// Identifier for a user. Positive, assigned sequentially starting at 1.
pub type UserId = u32;

/// A user record. Immutable once created; never deleted.
///
/// Users are keyed by [`UserId`] in the owning graph; the record itself
/// carries only the display name. Names are not required to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name for this user.
    pub name: String,
}

impl User {
    /// Create a user record with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_name() {
        let user = User::new("ada");
        assert_eq!(user.name, "ada");
    }

    #[test]
    fn serde_roundtrip() {
        let user = User::new("grace");
        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, restored);
    }
}
