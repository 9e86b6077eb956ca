//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Unvalidated input for [`UsersCommand::create_user`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate the username and persist a new user.
    ///
    /// Fails with `invalid_request` for a blank username, `duplicate` when the
    /// name is taken, and `internal_error` for any other storage fault.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;
}
