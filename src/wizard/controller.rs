//! The wizard controller
//!
//! Owns the flow state and applies [`Command`]s to it. Every mutation goes
//! through [`Wizard::dispatch`] or [`Wizard::poll`]; front ends only read
//! [`Wizard::state`]. Steps only move forward, and only once the current
//! step is done: a read license, then a saved owner, then at least one horse.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::command::Command;
use super::state::WizardState;
use super::step::WizardStep;
use crate::camera::{self, Camera, FacingMode, ImageFileCamera};
use crate::config::settings::Settings;
use crate::error::{CoggnifyError, CoggnifyResult};
use crate::models::{ExtractedLicense, HorseForm, LicenseSide, OwnerForm};
use crate::ocr::{LicenseReader, ProcessingTask, SimulatedLicenseReader, TaskPoll};
use crate::services::{HorseService, OwnerService};
use crate::storage::Storage;
use crate::verification::VerificationCode;

/// Notice posted once the license has been read
pub const LICENSE_PROCESSED_NOTICE: &str =
    "License processed successfully! Please verify the information.";

/// A processing task and the step it was started on
struct PendingRead {
    task: ProcessingTask,
    started_on: WizardStep,
}

/// Drives the onboarding flow
pub struct Wizard<'a> {
    storage: &'a Storage,
    camera: Box<dyn Camera>,
    reader: Arc<dyn LicenseReader>,
    facing: FacingMode,
    processing_delay: Duration,
    state: WizardState,
    pending: Option<PendingRead>,
}

impl<'a> Wizard<'a> {
    /// Build a wizard with the file camera and simulated reader from settings
    pub fn from_settings(storage: &'a Storage, settings: &Settings) -> CoggnifyResult<Self> {
        let camera = ImageFileCamera::new(settings.camera.source.clone());
        Self::resume(
            storage,
            settings,
            Box::new(camera),
            Arc::new(SimulatedLicenseReader),
        )
    }

    /// Build a wizard from whatever storage already holds
    ///
    /// A saved owner with an id plus at least one horse resumes straight on
    /// the dashboard; anything else starts at capture.
    pub fn resume(
        storage: &'a Storage,
        settings: &Settings,
        camera: Box<dyn Camera>,
        reader: Arc<dyn LicenseReader>,
    ) -> CoggnifyResult<Self> {
        let mut wizard = Self {
            storage,
            camera,
            reader,
            facing: settings.camera.facing,
            processing_delay: settings.processing_delay(),
            state: WizardState::default(),
            pending: None,
        };

        wizard.reload()?;
        if storage.has_completed_registration()? {
            info!("Saved registration found, resuming on dashboard");
            wizard.enter(WizardStep::Dashboard);
        }
        Ok(wizard)
    }

    /// Current state, for rendering
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    /// Take the one-shot notice, if any
    pub fn take_notice(&mut self) -> Option<String> {
        self.state.take_notice()
    }

    /// Apply a user command
    ///
    /// A command issued on the wrong step fails with
    /// [`CoggnifyError::Wizard`] and changes nothing.
    pub fn dispatch(&mut self, command: Command) -> CoggnifyResult<()> {
        if command.step() != self.state.step {
            warn!(command = command.name(), step = %self.state.step, "Command rejected");
            return Err(CoggnifyError::Wizard(format!(
                "Cannot {} during {}",
                command.name(),
                self.state.step
            )));
        }

        debug!(command = command.name(), "Dispatching command");
        match command {
            Command::StartCamera => self.start_camera(),
            Command::Capture(side) => self.capture(side, Utc::now()),
            Command::ProcessLicense => self.process_license(),
            Command::CreateOwner(form) => self.create_owner(form),
            Command::AddHorse(form) => self.add_horse(form),
            Command::Finish => self.finish(),
            Command::RefreshCode => {
                self.state.code = Some(VerificationCode::generate());
                Ok(())
            }
        }
    }

    /// Collect a finished license read, if there is one
    ///
    /// Returns whether the state changed. A result that belongs to a step the
    /// wizard has since left is dropped without touching the state.
    pub fn poll(&mut self) -> CoggnifyResult<bool> {
        if self.discard_stale_read() {
            return Ok(true);
        }

        let Some(pending) = self.pending.as_mut() else {
            return Ok(false);
        };

        match pending.task.poll() {
            TaskPoll::Pending => Ok(false),
            TaskPoll::Cancelled => {
                self.pending = None;
                self.state.processing = false;
                Ok(true)
            }
            TaskPoll::Ready(result) => {
                self.pending = None;
                self.state.processing = false;
                self.apply_license(result?)?;
                Ok(true)
            }
        }
    }

    /// Regenerate the code once its window has passed
    pub fn refresh_code_if_expired(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.step != WizardStep::Dashboard {
            return false;
        }
        match self.state.code {
            Some(code) if code.is_current_at(now) => false,
            _ => {
                self.state.code = Some(VerificationCode::at(now));
                true
            }
        }
    }

    /// Move forward one step once the current one is done
    fn advance(&mut self) -> CoggnifyResult<WizardStep> {
        let next = self.state.step.next().ok_or_else(|| {
            CoggnifyError::Wizard("Registration is already complete".into())
        })?;

        if next == WizardStep::Dashboard {
            self.reload()?;
        }
        if !self.step_complete() {
            warn!(step = %self.state.step, "Advance refused");
            return Err(CoggnifyError::Wizard(format!(
                "Cannot leave {} yet",
                self.state.step
            )));
        }

        self.enter(next);
        self.discard_stale_read();
        Ok(next)
    }

    fn step_complete(&self) -> bool {
        let has_owner = self.state.owner.as_ref().is_some_and(|o| o.has_id());
        match self.state.step {
            WizardStep::Capture => self.state.extracted.is_some(),
            WizardStep::Confirm => has_owner,
            WizardStep::RegisterHorses => has_owner && !self.state.horses.is_empty(),
            WizardStep::Dashboard => true,
        }
    }

    fn enter(&mut self, step: WizardStep) {
        info!(%step, "Entering step");
        self.state.step = step;
        if step == WizardStep::Dashboard {
            self.state.code = Some(VerificationCode::generate());
        }
    }

    fn reload(&mut self) -> CoggnifyResult<()> {
        self.state.owner = self.storage.owner.get()?;
        self.state.horses = self.storage.horses.get_all()?;
        Ok(())
    }

    fn start_camera(&mut self) -> CoggnifyResult<()> {
        self.camera.open(self.facing)?;
        self.state.camera_active = true;
        Ok(())
    }

    fn capture(&mut self, side: LicenseSide, now: DateTime<Utc>) -> CoggnifyResult<()> {
        if !self.camera.is_open() {
            return Err(CoggnifyError::Camera(
                "Start the camera before capturing".into(),
            ));
        }

        let image = camera::capture_still(self.camera.as_mut(), now)?;
        info!(
            side = side.key(),
            mime = image.mime_type().unwrap_or_default(),
            bytes = image.byte_len,
            "License image captured"
        );
        self.state.images.insert(side, image);
        Ok(())
    }

    fn process_license(&mut self) -> CoggnifyResult<()> {
        if self.pending.is_some() {
            debug!("License processing already running");
            return Ok(());
        }
        if !self.state.images.is_complete() {
            return Err(CoggnifyError::Validation(
                "Capture both sides of the license before processing".into(),
            ));
        }

        info!("Processing license images");
        let task = ProcessingTask::spawn(
            Arc::clone(&self.reader),
            self.state.images.clone(),
            self.processing_delay,
        );
        self.pending = Some(PendingRead {
            task,
            started_on: self.state.step,
        });
        self.state.processing = true;
        Ok(())
    }

    fn apply_license(&mut self, license: ExtractedLicense) -> CoggnifyResult<()> {
        self.state.owner_prefill = OwnerForm {
            name: license.name.clone(),
            phone: String::new(),
            address: license.address.clone(),
        };
        self.state.extracted = Some(license);
        self.advance()?;
        self.state.notice = Some(LICENSE_PROCESSED_NOTICE.to_string());
        Ok(())
    }

    fn create_owner(&mut self, form: OwnerForm) -> CoggnifyResult<()> {
        let owner = OwnerService::new(self.storage).create(form)?;
        self.state.owner = Some(owner);
        self.advance()?;
        Ok(())
    }

    fn add_horse(&mut self, form: HorseForm) -> CoggnifyResult<()> {
        let owner_id = self
            .state
            .owner
            .as_ref()
            .map(|o| o.id.clone())
            .unwrap_or_default();

        let service = HorseService::new(self.storage);
        service.add(form, owner_id)?;
        self.state.horses = service.list()?;
        Ok(())
    }

    fn finish(&mut self) -> CoggnifyResult<()> {
        if self.state.horses.is_empty() {
            return Err(CoggnifyError::Validation(
                "Add at least one horse before finishing".into(),
            ));
        }
        self.advance()?;
        Ok(())
    }

    /// Drop a read whose step has been left; returns whether one was dropped
    fn discard_stale_read(&mut self) -> bool {
        let stale = self
            .pending
            .as_ref()
            .is_some_and(|p| p.started_on != self.state.step);
        if stale {
            if let Some(pending) = self.pending.take() {
                pending.task.cancel();
            }
            self.state.processing = false;
            debug!("Discarded license read from a previous step");
        }
        stale
    }
}
