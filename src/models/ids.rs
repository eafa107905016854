//! Time-derived ID wrappers for owners and horses
//!
//! Ids are a display prefix followed by the last six digits of the epoch
//! millisecond clock. They are short and readable but NOT unique: two records
//! created in the same millisecond (or exactly 10^6 ms apart) share an id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of clock digits kept in an id
const ID_DIGITS: usize = 6;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix every generated id starts with
            pub const PREFIX: &'static str = $display_prefix;

            /// Generate an id from the current time
            pub fn generate() -> Self {
                Self::at(Utc::now())
            }

            /// Generate the id a record created at `now` receives
            pub fn at(now: DateTime<Utc>) -> Self {
                Self::from_millis(now.timestamp_millis())
            }

            /// Build an id from an epoch-millisecond timestamp
            pub fn from_millis(millis: i64) -> Self {
                let digits = millis.max(0).to_string();
                let start = digits.len().saturating_sub(ID_DIGITS);
                Self(format!("{}{}", $display_prefix, &digits[start..]))
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True for the placeholder id of a record that was never created
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Whether the id has the `<prefix><6 digits>` shape
            pub fn is_well_formed(&self) -> bool {
                self.0
                    .strip_prefix($display_prefix)
                    .map(|rest| rest.len() == ID_DIGITS && rest.bytes().all(|b| b.is_ascii_digit()))
                    .unwrap_or(false)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(OwnerId, "CR-");
define_id!(HorseId, "H-");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_owner_id_uses_last_six_digits() {
        let id = OwnerId::from_millis(1_718_000_123_456);
        assert_eq!(id.as_str(), "CR-123456");
        assert!(id.is_well_formed());
    }

    #[test]
    fn test_horse_id_prefix() {
        let id = HorseId::from_millis(1_718_000_654_321);
        assert_eq!(id.to_string(), "H-654321");
        assert!(id.is_well_formed());
    }

    #[test]
    fn test_leading_zeros_kept() {
        let id = OwnerId::from_millis(1_718_000_000_042);
        assert_eq!(id.as_str(), "CR-000042");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = OwnerId::generate();
        assert!(!id.is_empty());
        assert!(id.is_well_formed());
    }

    #[test]
    fn test_distinct_timestamps_give_distinct_ids() {
        let first = Utc.timestamp_millis_opt(1_718_000_000_100).unwrap();
        let second = Utc.timestamp_millis_opt(1_718_000_000_101).unwrap();
        assert_ne!(HorseId::at(first), HorseId::at(second));
    }

    #[test]
    fn test_default_is_empty() {
        let id = OwnerId::default();
        assert!(id.is_empty());
        assert!(!id.is_well_formed());
    }

    #[test]
    fn test_id_serialization() {
        let id = OwnerId::from_millis(1_718_000_123_456);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"CR-123456\"");
        let deserialized: OwnerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
