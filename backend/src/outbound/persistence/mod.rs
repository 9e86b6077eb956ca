//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain types; no business rules live here. Connections come from a `bb8`
//! pool via `diesel-async`, and every database failure is mapped onto the
//! owning port's error type.
//!
//! # Example
//!
//! ```ignore
//! use exercise_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracker")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_exercise_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
