//! Environment configuration with warn-level logging for invalid values.

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_POOL_MAX_CONNECTIONS, ENV_DATABASE_URL, ENV_PAGE_SIZE,
    ENV_POOL_MAX_CONNECTIONS, MAX_PAGE_SIZE,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Default on-disk location of the SQLite database.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("incident-tracker")
        .join("rows.db")
}

/// Database URL from the environment, or the default on-disk location.
pub fn database_url_from_env() -> String {
    std::env::var(ENV_DATABASE_URL)
        .unwrap_or_else(|_| format!("sqlite://{}", default_db_path().display()))
}

/// Page size from the environment, clamped to `1..=MAX_PAGE_SIZE`.
pub fn page_size_from_env() -> u32 {
    env_parse_with_default(ENV_PAGE_SIZE, DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Pool size from the environment, at least one connection.
pub fn pool_max_connections_from_env() -> u32 {
    env_parse_with_default(ENV_POOL_MAX_CONNECTIONS, DEFAULT_POOL_MAX_CONNECTIONS).max(1)
}
