//! HTTP server configuration object.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Bind to `host:port` with the in-memory store and the system clock.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool: None,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Persist users and exercises in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    /// Whether a database pool has been attached.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_the_in_memory_store() {
        let config = ServerConfig::new("127.0.0.1", 3000);

        assert_eq!(config.bind_addr(), ("127.0.0.1", 3000));
        assert!(!config.uses_database());
    }
}
