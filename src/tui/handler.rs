//! Event handler for the TUI
//!
//! Routes keyboard events to wizard commands or form edits based on the
//! current step and input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, InputMode};
use super::event::Event;
use crate::models::LicenseSide;
use crate::wizard::{Command, WizardStep};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // The alert blocks everything else
    if app.has_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.quit();
        return Ok(());
    }

    match (app.step(), key.code) {
        (WizardStep::Capture, KeyCode::Char('s')) => {
            app.run(Command::StartCamera);
        }
        (WizardStep::Capture, KeyCode::Char('f')) => {
            app.run(Command::Capture(LicenseSide::Front));
        }
        (WizardStep::Capture, KeyCode::Char('b')) => {
            app.run(Command::Capture(LicenseSide::Back));
        }
        (WizardStep::Capture, KeyCode::Char('p')) => {
            app.run(Command::ProcessLicense);
        }

        (WizardStep::Confirm, KeyCode::Char('e') | KeyCode::Enter)
        | (WizardStep::RegisterHorses, KeyCode::Char('e') | KeyCode::Char('a') | KeyCode::Enter) => {
            app.input_mode = InputMode::Editing;
        }
        (WizardStep::RegisterHorses, KeyCode::Char('d')) => {
            app.run(Command::Finish);
        }

        (WizardStep::Dashboard, KeyCode::Char('r')) => {
            app.run(Command::RefreshCode);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a form field has focus
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_form();
            return Ok(());
        }
        _ => {}
    }

    let Some(form) = app.active_form_mut() else {
        app.input_mode = InputMode::Normal;
        return Ok(());
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        code => {
            if let Some(input) = form.focused_input_mut() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
