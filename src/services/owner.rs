//! Owner service
//!
//! Creates the session's owner account. Submissions are not validated; blank
//! fields are stored as empty strings.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::audit::AuditEntry;
use crate::error::CoggnifyResult;
use crate::models::{Owner, OwnerForm};
use crate::storage::Storage;

/// Service for the owner account
pub struct OwnerService<'a> {
    storage: &'a Storage,
}

impl<'a> OwnerService<'a> {
    /// Create a new owner service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the owner account from a submitted form
    pub fn create(&self, form: OwnerForm) -> CoggnifyResult<Owner> {
        self.create_at(form, Utc::now())
    }

    /// Create the owner account as of `now`
    ///
    /// Replaces any owner already held; only one owner exists at a time.
    pub fn create_at(&self, form: OwnerForm, now: DateTime<Utc>) -> CoggnifyResult<Owner> {
        let owner = Owner::from_form(form, now);

        self.storage.owner.replace(owner.clone())?;

        self.storage.audit().log(&AuditEntry::owner_created(&owner))?;

        info!(id = %owner.id, name = %owner.name, "Owner account created");
        Ok(owner)
    }

    /// Get the current owner
    pub fn get(&self) -> CoggnifyResult<Option<Owner>> {
        self.storage.owner.get()
    }
}
