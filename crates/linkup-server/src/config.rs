//! Configuration for the feed server.
//!
//! All configuration is loaded from environment variables at startup. The
//! only required value is the database connection string.

use linkup_api::ServerConfig;
use linkup_db::PostgresConfig;
use linkup_db::postgres::DEFAULT_MAX_CONNECTIONS;

use crate::error::ConfigError;

/// Which store backs the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// `PostgreSQL` at the given connection string.
    Postgres(PostgresConfig),
    /// Process memory; everything is lost on exit.
    Memory,
}

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address.
    pub server: ServerConfig,
    /// Store selection and connection settings.
    pub backend: StoreBackend,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables (unless `STORE_BACKEND=memory`):
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `STORE_BACKEND` -- `postgres` (default) or `memory`
    /// - `HOST` -- bind host (default `0.0.0.0`)
    /// - `PORT` -- bind port (default `8080`)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default `10`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".to_owned())
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("invalid PORT: {e}")))?;

        let backend_name = lookup("STORE_BACKEND").unwrap_or_else(|| "postgres".to_owned());
        let backend = match backend_name.to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "postgres" | "postgresql" => {
                let url = lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or_else(|| ConfigError::Missing("DATABASE_URL".to_owned()))?;
                let max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
                    .map_or(Ok(DEFAULT_MAX_CONNECTIONS), |v| v.parse())
                    .map_err(|e| ConfigError::Invalid(format!("invalid DB_MAX_CONNECTIONS: {e}")))?;
                StoreBackend::Postgres(
                    PostgresConfig::new(&url).with_max_connections(max_connections),
                )
            }
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown STORE_BACKEND: {other}"
                )));
            }
        };

        Ok(Self {
            server: ServerConfig { host, port },
            backend,
        })
    }
}
