//! Horse model
//!
//! A livestock record belonging to the session's owner. Horses are only ever
//! appended; there is no edit or delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{HorseId, OwnerId};

/// Fields collected by the add-horse form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorseForm {
    pub name: String,
    pub breed: String,
    pub color: String,
    /// Blank when the horse has no microchip
    pub microchip_id: String,
}

impl HorseForm {
    /// Create a form without a microchip
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            color: color.into(),
            microchip_id: String::new(),
        }
    }

    /// Set the microchip id
    pub fn with_microchip(mut self, microchip_id: impl Into<String>) -> Self {
        self.microchip_id = microchip_id.into();
        self
    }
}

/// A registered horse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    /// `H-<6 digits>` derived from the time it was added
    pub id: HorseId,

    pub name: String,

    pub breed: String,

    pub color: String,

    /// Microchip number, absent when the form field was blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microchip_id: Option<String>,

    /// Owner this horse was registered under
    pub owner_id: OwnerId,

    /// When the horse was added
    pub added_at: DateTime<Utc>,
}

impl Horse {
    /// Create a horse from a submitted form at the given time
    pub fn from_form(form: HorseForm, owner_id: OwnerId, now: DateTime<Utc>) -> Self {
        let microchip = form.microchip_id.trim();
        let microchip_id = if microchip.is_empty() {
            None
        } else {
            Some(microchip.to_string())
        };

        Self {
            id: HorseId::at(now),
            name: form.name,
            breed: form.breed,
            color: form.color,
            microchip_id,
            owner_id,
            added_at: now,
        }
    }
}
