//! User registration and listing.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports on top of
//! a [`UserRepository`]. Username uniqueness is delegated to the repository,
//! which must enforce it atomically.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CreateUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, validation};

/// Map user persistence failures to domain errors.
///
/// Connection and query faults keep their detail in the message; the HTTP
/// adapter redacts internal errors before they reach clients.
pub(crate) fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateUsername { .. } => Error::duplicate("Username already exists"),
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserAccountsService<R> {
    users: Arc<R>,
}

impl<R> UserAccountsService<R> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UsersCommand for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let username = validation::username(request.username.as_deref())?;
        let user = User::register(username);
        self.users
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        debug!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{ErrorCode, UserId, Username};
    use rstest::rstest;

    fn make_service(repo: MockUserRepository) -> UserAccountsService<MockUserRepository> {
        UserAccountsService::new(Arc::new(repo))
    }

    fn request(username: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn create_user_persists_and_echoes_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|user| user.username().as_ref() == "fcc_test")
            .times(1)
            .return_once(|_| Ok(()));

        let user = make_service(repo)
            .create_user(request(Some(" fcc_test ")))
            .await
            .expect("user created");

        assert_eq!(user.username().as_ref(), "fcc_test");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[tokio::test]
    async fn create_user_rejects_missing_username_without_writing(#[case] username: Option<&str>) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let err = make_service(repo)
            .create_user(request(username))
            .await
            .expect_err("validation failure");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Username is required");
    }

    #[rstest]
    #[case(UserPersistenceError::duplicate_username("ada"), ErrorCode::Duplicate, "Username already exists")]
    #[case(UserPersistenceError::connection("refused"), ErrorCode::InternalError, "user repository unavailable: refused")]
    #[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError, "user repository error: syntax")]
    #[tokio::test]
    async fn create_user_maps_repository_failures(
        #[case] failure: UserPersistenceError,
        #[case] expected_code: ErrorCode,
        #[case] expected_message: &str,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().times(1).return_once(move |_| Err(failure));

        let err = make_service(repo)
            .create_user(request(Some("ada")))
            .await
            .expect_err("repository failure");

        assert_eq!(err.code(), expected_code);
        assert_eq!(err.message(), expected_message);
    }

    #[tokio::test]
    async fn list_users_returns_repository_contents() {
        let stored = vec![
            User::new(UserId::random(), Username::new("ada").expect("valid")),
            User::new(UserId::random(), Username::new("grace").expect("valid")),
        ];
        let expected = stored.clone();
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).return_once(move || Ok(stored));

        let users = make_service(repo).list_users().await.expect("users listed");

        assert_eq!(users, expected);
    }

    #[tokio::test]
    async fn list_users_reports_storage_faults_as_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(UserPersistenceError::connection("down")));

        let err = make_service(repo).list_users().await.expect_err("fault");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
