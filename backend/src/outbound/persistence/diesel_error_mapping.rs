//! Diesel error classification shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse category of a failed Diesel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFault {
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// A unique index rejected the write.
    UniqueViolation,
    /// Any other query or constraint failure.
    Query(&'static str),
}

/// Classify a Diesel error, logging the driver detail at debug level.
///
/// Driver messages stay in the log; callers only see a fixed description.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFault {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFault::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFault::Connection("database connection error")
        }
        DieselError::NotFound => DieselFault::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFault::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            DieselFault::Query("check constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DieselFault::Query("foreign key constraint violated")
        }
        _ => DieselFault::Query("database error"),
    }
}

/// Map a pool failure into a repository-specific connection error.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    debug!(%error, "database pool checkout failed");
    connection(error.message().to_owned())
}
