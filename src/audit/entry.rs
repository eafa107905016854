//! Audit entries for owner and horse records
//!
//! Every entry carries a snapshot of the record it concerns. Horse entries
//! also name the owner the horse was registered under, so the log alone
//! shows which horses belonged to which account after a reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Horse, Owner};

/// What happened to the record
///
/// Owners and horses are never edited, so there is no update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    /// Removed by a session reset
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Kind of record an entry concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Owner,
    Horse,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Owner => write!(f, "Owner"),
            EntityType::Horse => write!(f, "Horse"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Creation time of the record for creates, reset time for deletes
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// `CR-` or `H-` id of the record
    pub entity_id: String,

    /// Owner or horse name as entered
    pub name: String,

    /// Owner a horse belongs to; blank for owners and unowned horses
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner_id: String,

    /// The record as written or as removed
    pub record: serde_json::Value,
}

impl AuditEntry {
    /// A newly created owner account
    pub fn owner_created(owner: &Owner) -> Self {
        Self::for_owner(Operation::Create, owner, owner.created_at)
    }

    /// A newly registered horse
    pub fn horse_added(horse: &Horse) -> Self {
        Self::for_horse(Operation::Create, horse, horse.added_at)
    }

    /// An owner removed by a reset at `at`
    pub fn owner_removed(owner: &Owner, at: DateTime<Utc>) -> Self {
        Self::for_owner(Operation::Delete, owner, at)
    }

    /// A horse removed by a reset at `at`
    pub fn horse_removed(horse: &Horse, at: DateTime<Utc>) -> Self {
        Self::for_horse(Operation::Delete, horse, at)
    }

    fn for_owner(operation: Operation, owner: &Owner, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at,
            operation,
            entity_type: EntityType::Owner,
            entity_id: owner.id.to_string(),
            name: owner.name.clone(),
            owner_id: String::new(),
            record: serde_json::to_value(owner).unwrap_or_default(),
        }
    }

    fn for_horse(operation: Operation, horse: &Horse, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at,
            operation,
            entity_type: EntityType::Horse,
            entity_id: horse.id.to_string(),
            name: horse.name.clone(),
            owner_id: horse.owner_id.to_string(),
            record: serde_json::to_value(horse).unwrap_or_default(),
        }
    }

    /// One line for `coggnify history`
    ///
    /// `[2024-06-10 06:15:23 UTC] CREATE Horse H-000001 "Biscuit" owned by CR-000000`
    pub fn format_human_readable(&self) -> String {
        let name = if self.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            format!("\"{}\"", self.name)
        };

        let mut output = format!(
            "[{}] {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            name
        );

        if self.entity_type == EntityType::Horse {
            if self.owner_id.is_empty() {
                output.push_str(" with no owner");
            } else {
                output.push_str(&format!(" owned by {}", self.owner_id));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HorseForm, OwnerForm, OwnerId};
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn owner() -> Owner {
        Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", "1 Oak Ave"), at(1_718_000_123_456))
    }

    #[test]
    fn test_owner_created_uses_creation_time() {
        let owner = owner();
        let entry = AuditEntry::owner_created(&owner);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Owner);
        assert_eq!(entry.entity_id, "CR-123456");
        assert_eq!(entry.timestamp, owner.created_at);
        assert!(entry.owner_id.is_empty());
        assert_eq!(entry.record["phone"], "555-1212");
    }

    #[test]
    fn test_horse_added_names_its_owner() {
        let owner = owner();
        let horse = Horse::from_form(
            HorseForm::new("Biscuit", "Quarter Horse", "Bay"),
            owner.id.clone(),
            at(1_718_000_000_001),
        );
        let entry = AuditEntry::horse_added(&horse);

        assert_eq!(entry.entity_id, "H-000001");
        assert_eq!(entry.owner_id, "CR-123456");
        assert_eq!(
            entry.format_human_readable(),
            "[2024-06-10 06:13:20 UTC] CREATE Horse H-000001 \"Biscuit\" owned by CR-123456"
        );
    }

    #[test]
    fn test_removed_entries_keep_snapshot() {
        let reset_at = at(1_718_100_000_000);
        let horse = Horse::from_form(HorseForm::new("Stray", "", ""), OwnerId::default(), at(1));
        let entry = AuditEntry::horse_removed(&horse, reset_at);

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.timestamp, reset_at);
        assert_eq!(entry.record["name"], "Stray");
        assert!(entry.format_human_readable().ends_with("\"Stray\" with no owner"));

        let owner_entry = AuditEntry::owner_removed(&owner(), reset_at);
        assert!(owner_entry
            .format_human_readable()
            .ends_with("DELETE Owner CR-123456 \"Jane Smith\""));
    }

    #[test]
    fn test_unnamed_owner() {
        let owner = Owner::from_form(OwnerForm::default(), at(1_718_000_123_456));
        let line = AuditEntry::owner_created(&owner).format_human_readable();
        assert!(line.ends_with("CREATE Owner CR-123456 (unnamed)"));
    }

    #[test]
    fn test_blank_owner_id_not_serialized() {
        let json = serde_json::to_value(AuditEntry::owner_created(&owner())).unwrap();
        assert!(json.get("owner_id").is_none());
        assert_eq!(json["operation"], "create");
    }
}
