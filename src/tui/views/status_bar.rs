//! Status bar view
//!
//! Key hints for the current step and input mode.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::wizard::WizardStep;

fn hints(app: &App) -> &'static str {
    if app.has_alert() {
        return "Enter/Esc: close";
    }
    match (app.step(), app.input_mode) {
        (WizardStep::Confirm, InputMode::Editing) => {
            "Tab/Shift-Tab: field  Enter: create account  Esc: stop editing"
        }
        (WizardStep::RegisterHorses, InputMode::Editing) => {
            "Tab/Shift-Tab: field  Enter: add horse  Esc: stop editing"
        }
        (WizardStep::Capture, _) => "s: start camera  f/b: capture front/back  p: process  q: quit",
        (WizardStep::Confirm, _) => "e: edit form  q: quit",
        (WizardStep::RegisterHorses, _) => "e: edit form  d: done  q: quit",
        (WizardStep::Dashboard, _) => "r: refresh code  q: quit",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        InputMode::Editing => Span::styled(" EDIT ", Style::default().fg(Color::Black).bg(Color::Yellow)),
    };

    let line = Line::from(vec![
        mode,
        Span::raw(" "),
        Span::styled(hints(app), Style::default().fg(Color::Gray)),
        Span::raw(" │ "),
        Span::styled(
            app.paths.base_dir().display().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
