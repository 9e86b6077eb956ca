//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against mocks without any storage.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ExerciseLogQuery, ExerciseRepository, ExercisesCommand, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{ExerciseLogService, UserAccountsService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExercisesCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::from_repositories(store.clone(), store, Arc::new(DefaultClock));
    /// let _users = state.users.clone();
    /// ```
    pub fn from_repositories<U, E>(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> Self
    where
        U: UserRepository + 'static,
        E: ExerciseRepository + 'static,
    {
        let accounts = Arc::new(UserAccountsService::new(users.clone()));
        let exercise_log = Arc::new(ExerciseLogService::new(users, exercises, clock));
        Self {
            users: accounts.clone(),
            users_query: accounts,
            exercises: exercise_log.clone(),
            exercise_log,
        }
    }
}
