//! Core types for incident-tracker
//!
//! Domain types and pure helpers shared across the storage, service and http crates.

mod bulk_edit;
mod constants;
mod env_config;
mod issue;
mod page;
mod row;

pub use bulk_edit::*;
pub use constants::*;
pub use env_config::*;
pub use issue::*;
pub use page::*;
pub use row::*;
