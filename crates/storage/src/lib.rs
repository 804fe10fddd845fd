//! Storage layer for incident-tracker
//!
//! SQLite-backed record store for incident rows and the identified-issue vocabulary.

pub mod error;
mod migrations;
mod sqlite_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::run_migrations;
pub use sqlite_storage::SqliteStorage;
pub use traits::{IssueStore, RowStore};
