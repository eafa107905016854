//! Blocking alert dialog
//!
//! Errors and notices both open a modal that swallows input until it is
//! dismissed with Enter or Esc.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::CoggnifyError;

/// An error with a title and recovery suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a CoggnifyError
    pub fn from_error(error: &CoggnifyError) -> Self {
        let (title, details, suggestions): (String, String, Vec<&str>) = match error {
            CoggnifyError::Config(msg) => (
                "Configuration Error".into(),
                msg.clone(),
                vec!["Check config.json for syntax errors"],
            ),
            CoggnifyError::Io(msg) => (
                "I/O Error".into(),
                msg.clone(),
                vec![
                    "Check that you have write permissions to the data directory",
                    "Ensure there is enough disk space",
                ],
            ),
            CoggnifyError::Json(msg) => (
                "Data File Error".into(),
                format!("Failed to read or write data: {}", msg),
                vec!["The data file may be corrupted"],
            ),
            CoggnifyError::Validation(msg) => (
                "Validation Error".into(),
                msg.clone(),
                vec!["Review the input values and try again"],
            ),
            CoggnifyError::NotFound {
                entity_type,
                identifier,
            } => (
                format!("{} Not Found", entity_type),
                format!("Could not find {}: {}", entity_type.to_lowercase(), identifier),
                vec![],
            ),
            CoggnifyError::Camera(msg) => (
                "Camera Unavailable".into(),
                msg.clone(),
                vec![
                    "Set camera.source in config.json to an image file or directory",
                    "Check that the source exists and contains images",
                ],
            ),
            CoggnifyError::Wizard(msg) => (
                "Not Available Here".into(),
                msg.clone(),
                vec!["Finish the current step first"],
            ),
            CoggnifyError::Processing(msg) => (
                "Processing Error".into(),
                msg.clone(),
                vec!["Press p to process the license again"],
            ),
            CoggnifyError::Storage(msg) => (
                "Storage Error".into(),
                msg.clone(),
                vec!["Check that the data directory is accessible"],
            ),
            CoggnifyError::Export(msg) => (
                "Export Error".into(),
                msg.clone(),
                vec!["Check that you have write permissions to the output path"],
            ),
        };

        Self {
            title,
            details,
            suggestions: suggestions.into_iter().map(String::from).collect(),
        }
    }
}

/// What the modal is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Error(ErrorInfo),
    Notice(String),
}

impl Alert {
    pub fn from_error(error: &CoggnifyError) -> Self {
        Self::Error(ErrorInfo::from_error(error))
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice(message.into())
    }
}

/// Widget for rendering an alert
pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let (color, title, details, suggestions) = match self.alert {
            Alert::Error(info) => (
                Color::Red,
                format!(" Error: {} ", info.title),
                info.details.as_str(),
                info.suggestions.as_slice(),
            ),
            Alert::Notice(message) => (Color::Green, " Notice ".to_string(), message.as_str(), &[][..]),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(details)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            for suggestion in suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Enter or Esc to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an alert (centered in parent)
pub fn alert_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 16).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
