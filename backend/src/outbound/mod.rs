//! Driven adapters implementing the domain repository ports.
//!
//! `memory` keeps everything in process; `persistence` stores users and
//! exercises in PostgreSQL.

pub mod memory;
pub mod persistence;
