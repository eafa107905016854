//! Owner model
//!
//! The registered account holding one or more horses. A session has at most
//! one owner; it is created once and never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::OwnerId;

/// Fields collected by the owner form
///
/// No validation is applied: empty fields are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl OwnerForm {
    /// Create a form from its three fields
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

/// A horse owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// `CR-<6 digits>` derived from the creation time
    pub id: OwnerId,

    /// Full name, usually pre-filled from the license
    pub name: String,

    /// Contact phone, free text
    pub phone: String,

    /// Postal address, usually pre-filled from the license
    pub address: String,

    /// When the owner account was created
    pub created_at: DateTime<Utc>,
}

impl Owner {
    /// Create an owner from a submitted form at the given time
    pub fn from_form(form: OwnerForm, now: DateTime<Utc>) -> Self {
        Self {
            id: OwnerId::at(now),
            name: form.name,
            phone: form.phone,
            address: form.address,
            created_at: now,
        }
    }

    /// Whether this owner counts as an existing account
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_form() {
        let now = Utc.timestamp_millis_opt(1_718_000_123_456).unwrap();
        let owner = Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"), now);

        assert_eq!(owner.id.as_str(), "CR-123456");
        assert_eq!(owner.name, "Jane Smith");
        assert_eq!(owner.phone, "555-1212");
        assert_eq!(owner.address, "1 Oak Ave");
        assert_eq!(owner.created_at, now);
        assert!(owner.has_id());
    }

    #[test]
    fn test_empty_form_is_accepted() {
        let owner = Owner::from_form(OwnerForm::default(), Utc::now());
        assert!(owner.name.is_empty());
        assert!(owner.phone.is_empty());
        assert!(owner.address.is_empty());
        assert!(owner.has_id());
    }

    #[test]
    fn test_storage_shape() {
        let now = Utc.timestamp_millis_opt(1_718_000_123_456).unwrap();
        let owner = Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"), now);
        let value = serde_json::to_value(&owner).unwrap();

        assert_eq!(value["id"], "CR-123456");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());

        let created = value["createdAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
    }
}
