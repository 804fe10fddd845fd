//! Service layer for incident-tracker
//!
//! Centralizes business logic between HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::ref_patterns, reason = "Ref patterns are clearer in some contexts")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod error;
mod issue_service;
mod row_service;

pub use error::ServiceError;
pub use issue_service::IssueService;
pub use row_service::{BulkEditOutcome, RowService};
