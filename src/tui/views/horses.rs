//! Horse registration step

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::render_form;
use crate::display::format_horse_cards;
use crate::tui::app::{App, InputMode};
use crate::tui::layout::SplitLayout;

/// Render the horse form beside the registered list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SplitLayout::new(area);
    let state = app.wizard.state();

    let form_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.step()));
    let inner = form_block.inner(layout.left);
    frame.render_widget(form_block, layout.left);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(inner);

    render_form(
        frame,
        &app.horse_form,
        app.input_mode == InputMode::Editing,
        chunks[0],
    );

    let hint = if state.can_finish() {
        "Enter adds the horse. Press Esc then d when you are done."
    } else {
        "Enter adds the horse. Register at least one to continue."
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let list = if state.horses.is_empty() {
        "No horses yet.".to_string()
    } else {
        format_horse_cards(&state.horses)
    };
    frame.render_widget(
        Paragraph::new(list)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Your Horses ({}) ", state.horses.len())),
            )
            .wrap(Wrap { trim: false }),
        layout.right,
    );
}
