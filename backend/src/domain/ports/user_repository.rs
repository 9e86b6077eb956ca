//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The username is already taken; raised atomically by the store.
        DuplicateUsername { username: String } => "username already exists: {username}",
    }
}

/// Storage for registered users.
///
/// Implementations must enforce username uniqueness atomically: of any number
/// of concurrent inserts sharing a username, exactly one succeeds and the rest
/// fail with [`UserPersistenceError::DuplicateUsername`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Return every user in store-native order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
