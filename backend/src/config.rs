//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `JOBSTREAM_*` environment variables and
//! configuration files. Numeric settings carry defaults; only the database
//! URL is mandatory at startup.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::crypto::HasherConfig;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Startup failures caused by missing or inconsistent settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("database URL is not configured; set JOBSTREAM_DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Runtime settings for the JobStream service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBSTREAM")]
pub struct ServiceSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Listen address.
    pub host: Option<String>,
    /// Listen port.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// Connections kept open while idle.
    #[ortho_config(default = 2)]
    pub db_min_idle: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 30)]
    pub db_connect_timeout_secs: u64,
    /// Argon2id memory cost in KiB.
    #[ortho_config(default = 19456)]
    pub hash_memory_kib: u32,
    /// Argon2id passes.
    #[ortho_config(default = 2)]
    pub hash_iterations: u32,
    /// Argon2id lanes.
    #[ortho_config(default = 1)]
    pub hash_parallelism: u32,
}

impl ServiceSettings {
    /// Configured database URL.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingDatabaseUrl`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Pool sizing derived from the `db_*` settings.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingDatabaseUrl`] when no database is configured.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(self.db_max_connections)
            .with_min_idle(Some(self.db_min_idle))
            .with_connection_timeout(Duration::from_secs(self.db_connect_timeout_secs)))
    }

    /// Argon2id work factor.
    pub fn hasher_config(&self) -> HasherConfig {
        HasherConfig {
            memory_kib: self.hash_memory_kib,
            iterations: self.hash_iterations,
            parallelism: self.hash_parallelism,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Settings parsing and default resolution.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 9] = [
        "JOBSTREAM_DATABASE_URL",
        "JOBSTREAM_HOST",
        "JOBSTREAM_PORT",
        "JOBSTREAM_DB_MAX_CONNECTIONS",
        "JOBSTREAM_DB_MIN_IDLE",
        "JOBSTREAM_DB_CONNECT_TIMEOUT_SECS",
        "JOBSTREAM_HASH_MEMORY_KIB",
        "JOBSTREAM_HASH_ITERATIONS",
        "JOBSTREAM_HASH_PARALLELISM",
    ];

    fn load_from_empty_args() -> ServiceSettings {
        ServiceSettings::load_from_iter([OsString::from("jobstream")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.hasher_config(), HasherConfig::default());
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::MissingDatabaseUrl)
        );
        assert!(settings.pool_config().is_err());
    }

    #[rstest]
    fn database_url_alone_is_enough_to_start() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[0].1 = Some("postgres://jobs@db/jobstream".to_owned());
        let _guard = lock_env(vars);

        let pool = load_from_empty_args()
            .pool_config()
            .expect("database configured");
        assert_eq!(pool.max_size(), 10);
        assert_eq!(pool.min_idle(), Some(2));
        assert_eq!(pool.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "JOBSTREAM_DATABASE_URL",
                Some("postgres://jobs@db/jobstream".to_owned()),
            ),
            ("JOBSTREAM_HOST", Some("127.0.0.1".to_owned())),
            ("JOBSTREAM_PORT", Some("9090".to_owned())),
            ("JOBSTREAM_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("JOBSTREAM_DB_MIN_IDLE", Some("1".to_owned())),
            ("JOBSTREAM_DB_CONNECT_TIMEOUT_SECS", Some("5".to_owned())),
            ("JOBSTREAM_HASH_MEMORY_KIB", Some("65536".to_owned())),
            ("JOBSTREAM_HASH_ITERATIONS", Some("3".to_owned())),
            ("JOBSTREAM_HASH_PARALLELISM", Some("2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(
            settings.database_url(),
            Ok("postgres://jobs@db/jobstream")
        );

        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.min_idle(), Some(1));
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));

        assert_eq!(
            settings.hasher_config(),
            HasherConfig {
                memory_kib: 65_536,
                iterations: 3,
                parallelism: 2,
            }
        );
    }

    #[rstest]
    fn blank_database_url_counts_as_missing() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[0].1 = Some("   ".to_owned());
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::MissingDatabaseUrl)
        );
    }
}
