use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Runtime worker threads. `0` or `1` runs a single-threaded runtime.
    pub workers_count: usize,
    /// Default log filter, overridden by `RUST_LOG` when set.
    pub log_level: String,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    /// SQLx connection URL (default: `sqlite:basic_template.db`).
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `127.0.0.1`                |
    /// | `PORT`                 | `8000`                     |
    /// | `WORKERS_COUNT`        | `1`                        |
    /// | `LOG_LEVEL`            | `info`                     |
    /// | `LOG_JSON`             | `false`                    |
    /// | `DATABASE_URL`         | `sqlite:basic_template.db` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: parse_var(&lookup, "HOST", "127.0.0.1", "an IP address")?,
            port: parse_var(&lookup, "PORT", "8000", "a valid u16")?,
            workers_count: parse_var(&lookup, "WORKERS_COUNT", "1", "a non-negative integer")?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_var(&lookup, "LOG_JSON", "false", "`true` or `false`")?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:basic_template.db".into()),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", "5", "a valid u32")?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                "30",
                "a valid u64",
            )?,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
