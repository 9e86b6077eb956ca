//! Exercise tracker backend library.
//!
//! Hexagonal layout: `domain` holds entities, validation, services and ports;
//! `inbound` adapts HTTP onto the driving ports; `outbound` implements the
//! repository ports in memory and in PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
