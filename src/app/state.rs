//! Application state types and enums

use crate::api::DiskDescriptor;
use crate::commands::errors::ParsedError;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Locale,
    Disk,
    User,
    Summary,
    Install,
    Complete,
}

/// The fixed step sequence
pub const STEPS: [Step; 7] = [
    Step::Welcome,
    Step::Locale,
    Step::Disk,
    Step::User,
    Step::Summary,
    Step::Install,
    Step::Complete,
];

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Locale => "Language & Region",
            Step::Disk => "Installation Disk",
            Step::User => "User Account",
            Step::Summary => "Summary",
            Step::Install => "Installing",
            Step::Complete => "Complete",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Locale => "Locale",
            Step::Disk => "Disk",
            Step::User => "User",
            Step::Summary => "Summary",
            Step::Install => "Install",
            Step::Complete => "Done",
        }
    }
}

/// Position in the wizard plus the chosen disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Always a valid index into [`STEPS`]
    pub current: usize,
    /// Device identifier of the selected disk
    pub selected_disk: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        STEPS[self.current]
    }
}

/// Values entered into the wizard's forms
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub language: String,
    pub timezone: String,
    pub fullname: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

/// Which list has focus on the locale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleField {
    #[default]
    Language,
    Timezone,
}

/// Which field is active on the user step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserField {
    #[default]
    FullName,
    Username,
    Password,
    ConfirmPassword,
}

impl UserField {
    pub fn next(self) -> Self {
        match self {
            UserField::FullName => UserField::Username,
            UserField::Username => UserField::Password,
            UserField::Password => UserField::ConfirmPassword,
            UserField::ConfirmPassword => UserField::FullName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            UserField::FullName => UserField::ConfirmPassword,
            UserField::Username => UserField::FullName,
            UserField::Password => UserField::Username,
            UserField::ConfirmPassword => UserField::Password,
        }
    }
}

/// Disk list view
#[derive(Debug, Clone)]
pub enum DiskList {
    Loading,
    Loaded(Vec<DiskDescriptor>),
    Failed(ParsedError),
}

/// Lifecycle of the installation job as seen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    /// Nothing requested yet
    Idle,
    /// Install request in flight
    Starting,
    /// Subscription open, events arriving
    Monitoring,
    /// Final event received, waiting to show the complete step
    Finishing,
    /// Complete step shown
    Finished,
    /// Install request refused or subscription lost
    Failed,
}

/// Install step view: status text, progress bar and log
#[derive(Debug, Clone)]
pub struct InstallView {
    pub phase: InstallPhase,
    pub status: String,
    /// Progress bar width, percent
    pub progress: u16,
    /// Append-only, timestamped log entries
    pub log: Vec<String>,
}

impl Default for InstallView {
    fn default() -> Self {
        Self {
            phase: InstallPhase::Idle,
            status: "Preparing installation...".to_string(),
            progress: 0,
            log: Vec::new(),
        }
    }
}

/// Values shown on the summary step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub language: String,
    pub timezone: String,
    pub disk: String,
    pub username: String,
}

/// Step indicator ("Step n of m")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    /// 1-based position of the current step
    pub position: usize,
    pub total: usize,
}

impl StepIndicator {
    pub fn percent(&self) -> u16 {
        ((self.position * 100) / self.total.max(1)) as u16
    }

    pub fn label(&self) -> String {
        format!("Step {} of {}", self.position, self.total)
    }
}
