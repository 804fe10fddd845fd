//! Shared constants for incident-tracker.

/// Rows per page when neither the caller nor the environment sets one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on `per_page` for any listing (DoS protection).
pub const MAX_PAGE_SIZE: u32 = 100;

/// SQLite connection pool: maximum connections.
pub const DEFAULT_POOL_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection pool: acquire timeout in seconds.
pub const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// SQLite busy handler: how long a writer waits for the write lock, in seconds.
pub const BUSY_TIMEOUT_SECS: u64 = 5;

/// Flag value for a checked checkbox.
pub const YES: &str = "Yes";

/// Flag value for an unchecked checkbox.
pub const NO: &str = "No";

/// Environment variable overriding the database URL.
pub const ENV_DATABASE_URL: &str = "INCIDENT_TRACKER_DATABASE_URL";

/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "INCIDENT_TRACKER_PAGE_SIZE";

/// Environment variable overriding the pool size.
pub const ENV_POOL_MAX_CONNECTIONS: &str = "INCIDENT_TRACKER_POOL_MAX_CONNECTIONS";
