//! Dashboard display formatting

use chrono::{DateTime, Utc};

use super::horse::format_horse_cards;
use super::owner::format_owner_summary;
use crate::models::{Horse, Owner};
use crate::verification::VerificationCode;

/// Code line with its countdown
pub fn format_code(code: &VerificationCode, now: DateTime<Utc>) -> String {
    format!(
        "Verification Code: {}  (refreshes in {}s)",
        code,
        code.seconds_remaining_at(now)
    )
}

/// The whole dashboard: owner summary, code, horses
pub fn format_dashboard(
    owner: &Owner,
    horses: &[Horse],
    code: &VerificationCode,
    now: DateTime<Utc>,
) -> String {
    let mut output = format_owner_summary(owner, horses.len());
    output.push('\n');
    output.push_str(&format_code(code, now));
    output.push_str("\n\nYour Horses\n\n");
    output.push_str(&format_horse_cards(horses));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HorseForm, OwnerForm};
    use chrono::TimeZone;

    #[test]
    fn test_dashboard() {
        let now = Utc.timestamp_millis_opt(57_266_670 * 30_000 + 10_000).unwrap();
        let owner = Owner::from_form(OwnerForm::new("Jane Smith", "555-1212", ""), now);
        let horses = vec![Horse::from_form(
            HorseForm::new("Biscuit", "Quarter Horse", "Bay"),
            owner.id.clone(),
            now,
        )];
        let code = VerificationCode::at(now);

        let text = format_dashboard(&owner, &horses, &code, now);
        assert!(text.contains("Horses Registered: 1"));
        assert!(text.contains("Verification Code: 841150  (refreshes in 20s)"));
        assert!(text.contains("Biscuit"));
    }
}
