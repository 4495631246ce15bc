//! Application state management
//!
//! This module contains the wizard controller and is split into:
//! - `state.rs` - State type definitions (Step, WizardState, InstallView, etc.)
//! - `validation.rs` - Per-step validation rules
//! - `wizard.rs` - Pure step transitions
//! - `handlers.rs` - Keyboard input handlers
//! - `messages.rs` - Command message handling

mod handlers;
mod messages;
pub mod state;
pub mod validation;
pub mod wizard;

use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::api::{ApiClient, InstallationRequest};
use crate::commands::install::ProgressSubscription;
use crate::commands::{self, CommandMessage};
use crate::config::{label_for, Config};
use crate::constants::SPINNER_TICK_MS;

pub use state::{
    DiskList, FormValues, InstallPhase, InstallView, LocaleField, Step, StepIndicator, Summary,
    UserField, WizardState, STEPS,
};
use wizard::{Transition, ViewUpdate};

/// Main application state
pub struct App {
    pub config: Config,
    client: ApiClient,
    pub wizard: WizardState,
    pub form: FormValues,
    /// Step whose screen is currently shown
    pub visible: Option<Step>,
    pub indicator: StepIndicator,
    pub locale_focus: LocaleField,
    pub language_cursor: usize,
    pub timezone_cursor: usize,
    pub disks: DiskList,
    pub disk_cursor: usize,
    disk_fetch_in_flight: bool,
    pub user_field: UserField,
    pub summary: Option<Summary>,
    pub install: InstallView,
    /// Blocking message; swallows input until dismissed
    pub alert: Option<String>,
    /// Non-blocking hint under the current screen
    pub hint: Option<String>,
    /// None while the health check is running
    pub service_reachable: Option<bool>,
    pub reboot_requested: bool,
    pub should_quit: bool,
    pub show_exit_confirm: bool,
    pub spinner_state: usize,
    pub last_tick: Instant,
    subscription: Option<ProgressSubscription>,
    pub(crate) cmd_tx: Option<mpsc::Sender<CommandMessage>>,
    install_log: Option<File>,
    pub install_log_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, client: ApiClient) -> Self {
        let mut form = FormValues::default();
        let language_cursor = preselect(&config.languages, config.wizard.default_language.as_deref());
        let timezone_cursor = preselect(&config.timezones, config.wizard.default_timezone.as_deref());
        if config.wizard.default_language.is_some() {
            if let Some(option) = config.languages.get(language_cursor) {
                form.language = option.value.clone();
            }
        }
        if config.wizard.default_timezone.is_some() {
            if let Some(option) = config.timezones.get(timezone_cursor) {
                form.timezone = option.value.clone();
            }
        }

        let wizard = WizardState::new();
        Self {
            config,
            client,
            visible: Some(wizard.step()),
            indicator: wizard::indicator(wizard.current),
            wizard,
            form,
            locale_focus: LocaleField::default(),
            language_cursor,
            timezone_cursor,
            disks: DiskList::Loading,
            disk_cursor: 0,
            disk_fetch_in_flight: false,
            user_field: UserField::default(),
            summary: None,
            install: InstallView::default(),
            alert: None,
            hint: None,
            service_reachable: None,
            reboot_requested: false,
            should_quit: false,
            show_exit_confirm: false,
            spinner_state: 0,
            last_tick: Instant::now(),
            subscription: None,
            cmd_tx: None,
            install_log: None,
            install_log_path: None,
        }
    }

    /// Mirror the installation log to a file (truncated)
    pub fn with_install_log(mut self, path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match File::create(&path) {
            Ok(mut file) => {
                let _ = writeln!(file, "=== TwinaOS Installation Log ===\n");
                let _ = file.flush();
                self.install_log = Some(file);
                self.install_log_path = Some(path);
            }
            Err(e) => {
                tracing::warn!("Failed to create install log file: {}", e);
            }
        }
        self
    }

    pub fn set_command_sender(&mut self, tx: mpsc::Sender<CommandMessage>) {
        self.cmd_tx = Some(tx);
    }

    /// Called on each tick to update animations
    pub fn tick(&mut self) {
        if self.last_tick.elapsed().as_millis() >= SPINNER_TICK_MS {
            self.spinner_state = (self.spinner_state + 1) % 10;
            self.last_tick = Instant::now();
        }
    }

    /// Kick off the startup requests: health check and disk list
    pub async fn start_initial_command(&mut self) -> Result<()> {
        if let Some(tx) = &self.cmd_tx {
            commands::service::start_health_check(self.client.clone(), tx.clone());
        }
        self.load_disks();
        Ok(())
    }

    /// Fetch the disk list unless a fetch is already running
    pub(crate) fn load_disks(&mut self) {
        let Some(tx) = self.cmd_tx.clone() else {
            return;
        };
        if self.disk_fetch_in_flight {
            tracing::debug!("Disk fetch already in flight");
            return;
        }
        self.disks = DiskList::Loading;
        self.disk_cursor = 0;
        self.wizard = wizard::clear_disk(&self.wizard);
        self.disk_fetch_in_flight = true;
        commands::disks::start_disk_load(self.client.clone(), tx);
    }

    /// Apply a navigation result: adopt the state and project the updates
    pub(crate) fn apply(&mut self, transition: Transition) {
        self.wizard = transition.state;
        for update in transition.updates {
            match update {
                ViewUpdate::Hide(step) => {
                    if self.visible == Some(step) {
                        self.visible = None;
                    }
                }
                ViewUpdate::Show(step) => {
                    self.visible = Some(step);
                    self.hint = None;
                }
                ViewUpdate::Progress(indicator) => {
                    self.indicator = indicator;
                }
                ViewUpdate::RenderSummary => {
                    self.summary = Some(self.build_summary());
                }
            }
        }
    }

    fn build_summary(&self) -> Summary {
        Summary {
            language: label_for(&self.config.languages, &self.form.language).to_string(),
            timezone: label_for(&self.config.timezones, &self.form.timezone).to_string(),
            disk: self.wizard.selected_disk.clone().unwrap_or_default(),
            username: self.form.username.clone(),
        }
    }

    /// Submit the installation. Fires at most once, from the summary step.
    pub(crate) fn start_installation(&mut self) {
        if self.wizard.step() != Step::Summary || self.install.phase != InstallPhase::Idle {
            tracing::warn!("Ignoring installation start outside the summary step");
            return;
        }
        let Some(disk) = self.wizard.selected_disk.clone() else {
            return;
        };
        let Some(tx) = self.cmd_tx.clone() else {
            return;
        };

        let request = InstallationRequest {
            language: self.form.language.clone(),
            timezone: self.form.timezone.clone(),
            disk,
            fullname: self.form.fullname.clone(),
            username: self.form.username.clone(),
            password: self.form.password.clone(),
        };

        self.apply(wizard::force_advance(&self.wizard));
        self.install.phase = InstallPhase::Starting;
        self.install.status = "Starting installation...".to_string();
        commands::install::start_install(self.client.clone(), request, tx);
    }

    /// Open the progress subscription once the service accepted the job
    pub(crate) fn open_subscription(&mut self) {
        let Some(tx) = self.cmd_tx.clone() else {
            return;
        };
        self.subscription = Some(ProgressSubscription::open(self.client.clone(), tx));
    }

    pub(crate) fn close_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.close();
        }
    }

    pub(crate) fn request_reboot(&mut self) {
        if self.reboot_requested {
            return;
        }
        self.reboot_requested = true;
        commands::reboot::start_reboot(self.client.clone());
    }

    /// Append a timestamped entry to the installation log view
    pub(crate) fn append_log(&mut self, message: &str) {
        let entry = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), message);
        if let Some(ref mut file) = self.install_log {
            let _ = writeln!(file, "{}", entry);
            let _ = file.flush();
        }
        self.install.log.push(entry);
    }
}

fn preselect(options: &[crate::config::SelectOption], value: Option<&str>) -> usize {
    value
        .and_then(|v| options.iter().position(|o| o.value == v))
        .unwrap_or(0)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::ServiceConfig;

    /// App wired to a local channel and an address nothing listens on
    pub fn app() -> (App, mpsc::Receiver<CommandMessage>) {
        let mut config = Config::default();
        config.service = ServiceConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ServiceConfig::default()
        };
        config.wizard.completion_delay_ms = 10;
        let client = ApiClient::new(&config.service).unwrap();
        let mut app = App::new(config, client);
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        (app, rx)
    }

    /// Jump straight to a step, keeping the view in sync
    pub fn goto(app: &mut App, step: Step) {
        app.wizard.current = STEPS.iter().position(|s| *s == step).unwrap();
        app.visible = Some(step);
        app.indicator = wizard::indicator(app.wizard.current);
    }
}
