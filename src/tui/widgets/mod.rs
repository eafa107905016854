//! Reusable widgets for the TUI

pub mod alert;
pub mod input;

pub use alert::{alert_area, Alert, AlertDialog, ErrorInfo};
pub use input::TextInput;
