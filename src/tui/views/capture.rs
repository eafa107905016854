//! License capture step

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::LicenseSide;
use crate::tui::app::App;

/// Render the capture panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.wizard.state();
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from("Take a photo of the front and back of your driver's license."),
        Line::from(""),
    ];

    if state.camera_active {
        lines.push(Line::from(Span::styled(
            "Camera: live",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[s]", key),
            Span::raw(" Start Camera"),
        ]));
    }
    lines.push(Line::from(""));

    for side in [LicenseSide::Front, LicenseSide::Back] {
        let preview = match (state.capture_marker(side), state.images.get(side)) {
            (Some(marker), Some(image)) => Span::styled(
                format!(
                    "{}  ({}, {} bytes)",
                    marker,
                    image.mime_type().unwrap_or("unknown type"),
                    image.byte_len
                ),
                Style::default().fg(Color::Green),
            ),
            _ => Span::styled("not captured", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![Span::raw(format!("{:<6} ", side.to_string())), preview]));
    }
    lines.push(Line::from(""));

    if state.can_capture() {
        lines.push(Line::from(vec![
            Span::styled("[f]", key),
            Span::raw(" Capture Front   "),
            Span::styled("[b]", key),
            Span::raw(" Capture Back"),
        ]));
    }

    if state.can_process() {
        let label = if state.processing {
            Span::styled(state.process_label(), Style::default().fg(Color::Yellow))
        } else {
            Span::raw(state.process_label())
        };
        lines.push(Line::from(vec![Span::styled("[p]", key), Span::raw(" "), label]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.step())),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
