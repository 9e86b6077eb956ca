//! Selection of the storage backend behind the HTTP state.

use std::sync::Arc;

use tracing::info;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("serving from PostgreSQL");
            HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselExerciseRepository::new(pool.clone())),
                config.clock.clone(),
            )
        }
        None => {
            info!("serving from the in-memory store; data is lost on restart");
            let store = Arc::new(InMemoryStore::new());
            HttpState::from_repositories(store.clone(), store, config.clock.clone())
        }
    }
}
