//! Display formatting for terminal output
//!
//! Plain-text renderings of owners, horses and the dashboard, shared by the
//! CLI and the TUI.

pub mod dashboard;
pub mod horse;
pub mod owner;

pub use dashboard::{format_code, format_dashboard};
pub use horse::{format_horse_card, format_horse_cards, format_horse_table};
pub use owner::{format_owner_details, format_owner_summary};
