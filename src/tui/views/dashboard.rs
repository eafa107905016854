//! Dashboard step

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{format_horse_cards, format_owner_summary};
use crate::tui::app::App;

/// Render the owner summary, the code and the horse list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.wizard.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Owner summary
            Constraint::Length(4), // Code
            Constraint::Min(3),    // Horses
        ])
        .split(area);

    let summary = match &state.owner {
        Some(owner) => format_owner_summary(owner, state.horses.len()),
        None => "No owner registered.".to_string(),
    };
    frame.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.step())),
        ),
        chunks[0],
    );

    let code_line = match &state.code {
        Some(code) => Line::from(vec![
            Span::styled(
                code.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   refreshes in {}s", code.seconds_remaining_at(Utc::now())),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from("No code generated"),
    };
    frame.render_widget(
        Paragraph::new(vec![code_line]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Verification Code "),
        ),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(format_horse_cards(&state.horses))
            .block(Block::default().borders(Borders::ALL).title(" Your Horses "))
            .wrap(Wrap { trim: false }),
        chunks[2],
    );
}
