//! Horse service
//!
//! Appends horses to the owner's collection. No duplicate check is made on
//! microchip numbers and the owner reference is not verified.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::audit::AuditEntry;
use crate::error::CoggnifyResult;
use crate::models::{Horse, HorseForm, OwnerId};
use crate::storage::Storage;

/// Service for horse registration
pub struct HorseService<'a> {
    storage: &'a Storage,
}

impl<'a> HorseService<'a> {
    /// Create a new horse service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a horse under `owner_id`
    pub fn add(&self, form: HorseForm, owner_id: OwnerId) -> CoggnifyResult<Horse> {
        self.add_at(form, owner_id, Utc::now())
    }

    /// Register a horse as of `now`
    pub fn add_at(
        &self,
        form: HorseForm,
        owner_id: OwnerId,
        now: DateTime<Utc>,
    ) -> CoggnifyResult<Horse> {
        let horse = Horse::from_form(form, owner_id, now);

        self.storage.horses.append(horse.clone())?;

        self.storage.audit().log(&AuditEntry::horse_added(&horse))?;

        info!(id = %horse.id, name = %horse.name, "Horse added");
        Ok(horse)
    }

    /// Register a horse under whichever owner is current
    ///
    /// Without an owner the horse gets an empty owner id.
    pub fn add_for_current_owner(&self, form: HorseForm) -> CoggnifyResult<Horse> {
        let owner_id = self
            .storage
            .owner
            .get()?
            .map(|o| o.id)
            .unwrap_or_default();
        self.add(form, owner_id)
    }

    /// All horses in insertion order
    pub fn list(&self) -> CoggnifyResult<Vec<Horse>> {
        self.storage.horses.get_all()
    }
}
