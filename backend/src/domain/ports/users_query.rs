//! Driving port for user-facing queries.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users. Callers must not assume any ordering.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
