//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are implemented by the domain services
//! and consumed by inbound adapters. Driven ports (`*Repository`) are
//! implemented by outbound persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log_query;
mod exercise_repository;
mod exercises_command;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use exercise_log_query::MockExerciseLogQuery;
pub use exercise_log_query::{ExerciseLogQuery, ExerciseLogRequest};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{ExercisePersistenceError, ExerciseRepository};
#[cfg(test)]
pub use exercises_command::MockExercisesCommand;
pub use exercises_command::{AddExerciseRequest, AddExerciseResponse, ExercisesCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{CreateUserRequest, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
