//! Audit logging system for Coggnify
//!
//! Records owner and horse creation, and the deletes performed by a session
//! reset, in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use coggnify::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::owner_created(&owner))?;
//! println!("{}", logger.read_recent(1)?[0].format_human_readable());
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
