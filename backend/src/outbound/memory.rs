//! In-process store implementing both repository ports.
//!
//! Used when no database is configured and by HTTP behaviour tests. All state
//! sits behind a single mutex, so the username check and the insert happen
//! atomically with respect to concurrent requests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Exercise, LogFilter, User, UserId};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Volatile store for users and exercises. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        if state
            .users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut state = self.lock().map_err(ExercisePersistenceError::query)?;
        state.exercises.push(exercise.clone());
        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let state = self.lock().map_err(ExercisePersistenceError::query)?;
        let mut matching: Vec<Exercise> = state
            .exercises
            .iter()
            .filter(|exercise| exercise.user_id == *user_id && filter.admits(exercise.date))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for same-day entries.
        matching.sort_by_key(|exercise| exercise.date);
        if let Some(limit) = filter.limit {
            matching.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(matching)
    }
}
