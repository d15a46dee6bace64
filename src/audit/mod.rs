//! Audit logging for budget changes
//!
//! Every budget that is created, has its limit changed, or is deleted gets an
//! entry in an append-only audit log with the before/after snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create("Food", &budget))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
