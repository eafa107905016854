//! Application state for the TUI
//!
//! The App wraps the wizard and adds what only the terminal front end needs:
//! form buffers, input mode and the blocking alert.

use chrono::Utc;
use tracing::warn;

use crate::config::paths::CoggnifyPaths;
use crate::error::CoggnifyError;
use crate::wizard::{Command, Wizard, WizardStep};

use super::form::FormState;
use super::widgets::Alert;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes go to the focused form field
    Editing,
}

/// Main application state
pub struct App<'a> {
    pub wizard: Wizard<'a>,

    /// Paths configuration
    pub paths: &'a CoggnifyPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    pub input_mode: InputMode,

    /// Modal shown above everything else
    pub alert: Option<Alert>,

    pub owner_form: FormState,

    pub horse_form: FormState,

    /// Step the forms were last synced for
    synced_step: Option<WizardStep>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(wizard: Wizard<'a>, paths: &'a CoggnifyPaths) -> Self {
        let mut app = Self {
            wizard,
            paths,
            should_quit: false,
            input_mode: InputMode::default(),
            alert: None,
            owner_form: FormState::owner(),
            horse_form: FormState::horse(),
            synced_step: None,
        };
        app.sync();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Show an error in the blocking alert
    pub fn show_error(&mut self, error: &CoggnifyError) {
        warn!(error = %error, "Showing error alert");
        self.alert = Some(Alert::from_error(error));
    }

    /// Dispatch a command, reporting failures through the alert
    ///
    /// Returns whether the command succeeded.
    pub fn run(&mut self, command: Command) -> bool {
        let ok = match self.wizard.dispatch(command) {
            Ok(()) => true,
            Err(e) => {
                self.show_error(&e);
                false
            }
        };
        self.sync();
        ok
    }

    /// Periodic update: collect processing results and roll the code over
    pub fn tick(&mut self) {
        if let Err(e) = self.wizard.poll() {
            self.show_error(&e);
        }
        self.wizard.refresh_code_if_expired(Utc::now());
        self.sync();
    }

    /// Submit whichever form the current step shows
    pub fn submit_form(&mut self) {
        match self.step() {
            WizardStep::Confirm => {
                let form = self.owner_form.to_owner_form();
                self.run(Command::CreateOwner(form));
            }
            WizardStep::RegisterHorses => {
                let form = self.horse_form.to_horse_form();
                if self.run(Command::AddHorse(form)) {
                    self.horse_form.clear();
                }
            }
            _ => {}
        }
    }

    /// The form shown on the current step, if any
    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.step() {
            WizardStep::Confirm => Some(&mut self.owner_form),
            WizardStep::RegisterHorses => Some(&mut self.horse_form),
            _ => None,
        }
    }

    /// Pull notices and step changes out of the wizard
    fn sync(&mut self) {
        if let Some(notice) = self.wizard.take_notice() {
            // Errors already showing take precedence
            if self.alert.is_none() {
                self.alert = Some(Alert::notice(notice));
            }
        }

        let step = self.step();
        if self.synced_step == Some(step) {
            return;
        }
        self.synced_step = Some(step);

        match step {
            WizardStep::Confirm => {
                let prefill = self.wizard.state().owner_prefill.clone();
                self.owner_form.load_owner(&prefill);
                self.owner_form.focused = 0;
                self.input_mode = InputMode::Editing;
            }
            WizardStep::RegisterHorses => {
                self.horse_form.clear();
                self.input_mode = InputMode::Editing;
            }
            WizardStep::Capture | WizardStep::Dashboard => {
                self.input_mode = InputMode::Normal;
            }
        }
    }
}
