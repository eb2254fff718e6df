//! Audit logging for the contact book
//!
//! Records every contact added or deleted in an append-only, line-delimited
//! JSON log so the history can be reviewed later.
//!
//! - `AuditEntry`: one operation with its timestamp and the affected contact
//! - `AuditLogger`: appends entries to the log file and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
