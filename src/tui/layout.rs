//! Layout definitions for the TUI
//!
//! Step header on top, the active step's panel in the middle, status bar at
//! the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Step indicator
    pub header: Rect,
    /// Active step panel
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Side-by-side split used by the horse registration step
pub struct SplitLayout {
    pub left: Rect,
    pub right: Rect,
}

impl SplitLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self {
            left: chunks[0],
            right: chunks[1],
        }
    }
}

/// One single-line row per form field, with a blank line between fields
pub fn field_rows(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let y = area.y.saturating_add((i as u16).saturating_mul(2));
            Rect::new(area.x, y, area.width, 1)
        })
        .filter(|row| row.y < area.y.saturating_add(area.height))
        .collect()
}
