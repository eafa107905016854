//! Owner confirmation step

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render_form;
use crate::tui::app::{App, InputMode};

/// Render the owner form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.step()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let intro = match &app.wizard.state().extracted {
        Some(license) => format!(
            "Read from license {} ({}). Check the details below.",
            license.license_number, license.state
        ),
        None => "Enter the owner's details.".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(intro)).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    render_form(
        frame,
        &app.owner_form,
        app.input_mode == InputMode::Editing,
        chunks[1],
    );
}
