//! Owner display formatting

use crate::models::Owner;

/// The summary block shown at the top of the dashboard
pub fn format_owner_summary(owner: &Owner, horse_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Owner ID: {}\n", owner.id));
    output.push_str(&format!("  Name:              {}\n", owner.name));
    output.push_str(&format!("  Phone:             {}\n", owner.phone));
    output.push_str(&format!("  Horses Registered: {}\n", horse_count));

    output
}

/// Full owner record, including the fields the summary leaves out
pub fn format_owner_details(owner: &Owner) -> String {
    let mut output = String::new();

    output.push_str(&format!("Owner: {}\n", owner.name));
    output.push_str(&format!("  ID:       {}\n", owner.id));
    output.push_str(&format!("  Phone:    {}\n", owner.phone));
    output.push_str(&format!("  Address:  {}\n", owner.address));
    output.push_str(&format!(
        "  Created:  {}\n",
        owner.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
