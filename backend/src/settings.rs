//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRACKER_*` environment variables, or a
//! configuration file, in increasing order of precedence as defined by
//! `ortho_config`.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime configuration for the tracker service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one the service keeps data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded schema migrations before serving.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured pool size, falling back to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether to migrate before serving, falling back to `true`.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env([
            ("TRACKER_HOST", None::<String>),
            ("TRACKER_PORT", None::<String>),
            ("TRACKER_DATABASE_URL", None::<String>),
            ("TRACKER_POOL_MAX_SIZE", None::<String>),
            ("TRACKER_RUN_MIGRATIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.database_url().is_none());
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("TRACKER_PORT", Some("8081".to_owned())),
            (
                "TRACKER_DATABASE_URL",
                Some("postgres://tracker@localhost/tracker".to_owned()),
            ),
            ("TRACKER_POOL_MAX_SIZE", Some("4".to_owned())),
            ("TRACKER_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8081);
        assert_eq!(
            settings.database_url(),
            Some("postgres://tracker@localhost/tracker")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("TRACKER_DATABASE_URL", Some("   ".to_owned())),
            ("TRACKER_HOST", None::<String>),
            ("TRACKER_PORT", None::<String>),
            ("TRACKER_POOL_MAX_SIZE", None::<String>),
            ("TRACKER_RUN_MIGRATIONS", None::<String>),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
