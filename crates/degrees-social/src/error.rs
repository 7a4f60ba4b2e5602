//! Error types for social graph mutations.

use thiserror::Error;

use crate::user::UserId;

/// Errors that can occur when mutating a social graph.
///
/// All variants are caller-recoverable: the population routine treats a
/// rejected friendship as "try a different pair".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SocialError {
    /// A user cannot befriend themselves.
    #[error("user {0} cannot befriend themselves")]
    SelfFriendship(UserId),

    /// The friendship already exists in one or both directions.
    #[error("friendship between {a} and {b} already exists")]
    DuplicateFriendship {
        /// One endpoint of the rejected pair.
        a: UserId,
        /// The other endpoint.
        b: UserId,
    },

    /// A referenced user ID has no user record.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

/// Convenience alias for social graph results.
pub type SocialResult<T> = Result<T, SocialError>;
