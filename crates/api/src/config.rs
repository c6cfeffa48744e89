//! Runtime settings for the HTTP server and its store.
//!
//! Settings come from the process environment (after `.env` has been loaded
//! by `main`). Every knob except `DATABASE_URL` has a local-development
//! default; a value that is present but unparseable is a startup error.

use std::str::FromStr;

/// A setting was present but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after SIGINT/SIGTERM.
    pub shutdown_timeout_secs: u64,
    /// `None` selects the seeded in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// Recognised keys: `HOST` (`0.0.0.0`), `PORT` (`3000`), `CORS_ORIGINS`
    /// (comma separated, `http://localhost:4200`), `REQUEST_TIMEOUT_SECS`
    /// (`30`), `SHUTDOWN_TIMEOUT_SECS` (`30`), `DATABASE_URL` (unset) and
    /// `DB_MAX_CONNECTIONS` (`20`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`, so
    /// settings can be supplied without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", var("PORT"), 3000)?,
            cors_origins,
            request_timeout_secs: parse_or(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS"),
                30,
            )?,
            shutdown_timeout_secs: parse_or(
                "SHUTDOWN_TIMEOUT_SECS",
                var("SHUTDOWN_TIMEOUT_SECS"),
                30,
            )?,
            database_url: var("DATABASE_URL"),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 20)?,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
