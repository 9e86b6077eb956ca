//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities (users, exercises, logs), the
//! validation rules applied to raw input, and the services implementing the
//! driving ports. Nothing in this module depends on HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - User, UserId, Username: registered accounts.
//! - Exercise, LogFilter, ExerciseLog: recorded activities and log reads.
//! - UserAccountsService, ExerciseLogService: driving port implementations.

pub mod error;
pub mod exercise;
pub mod exercise_log_service;
pub mod ports;
pub mod user;
pub mod user_accounts_service;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{
    Description, DurationMinutes, Exercise, ExerciseId, ExerciseLog, ExerciseValidationError,
    LogFilter, format_calendar_date,
};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_accounts_service::UserAccountsService;
