//! TUI Views module
//!
//! One panel per wizard step, plus the header and status bar.

pub mod capture;
pub mod dashboard;
pub mod header;
pub mod horses;
pub mod owner;
pub mod status_bar;

use ratatui::{layout::Rect, Frame};

use super::app::App;
use super::form::FormState;
use super::layout::{field_rows, AppLayout};
use super::widgets::{alert_area, AlertDialog};
use crate::wizard::WizardStep;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);

    match app.step() {
        WizardStep::Capture => capture::render(frame, app, layout.main),
        WizardStep::Confirm => owner::render(frame, app, layout.main),
        WizardStep::RegisterHorses => horses::render(frame, app, layout.main),
        WizardStep::Dashboard => dashboard::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(alert) = &app.alert {
        frame.render_widget(AlertDialog::new(alert), alert_area(frame.area()));
    }
}

/// Render a form's fields, highlighting the focused one while editing
fn render_form(frame: &mut Frame, form: &FormState, editing: bool, area: Rect) {
    for (i, row) in field_rows(area, form.fields.len()).into_iter().enumerate() {
        let mut input = form.fields[i].clone();
        input.focused = editing && i == form.focused;
        frame.render_widget(&input, row);
    }
}
