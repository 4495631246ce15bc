//! Command message handling for the application

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use super::state::{DiskList, InstallPhase, Step};
use super::{wizard, App};
use crate::api::ProgressEvent;
use crate::commands::errors::ParsedError;
use crate::commands::install::schedule_completion;
use crate::commands::CommandMessage;

/// Regex to match ANSI escape codes.
static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap());

/// Strip ANSI escape codes from a string
fn strip_ansi_codes(s: &str) -> String {
    ANSI_RE.replace_all(s, "").to_string()
}

impl App {
    /// Handle messages from background requests
    pub async fn handle_command_message(&mut self, msg: CommandMessage) -> Result<()> {
        match msg {
            CommandMessage::ServiceHealth { reachable } => {
                self.service_reachable = Some(reachable);
            }
            CommandMessage::DisksLoaded(disks) => {
                self.disk_fetch_in_flight = false;
                self.disk_cursor = 0;
                self.disks = DiskList::Loaded(disks);
            }
            CommandMessage::DisksFailed(error) => {
                self.disk_fetch_in_flight = false;
                self.wizard = wizard::clear_disk(&self.wizard);
                self.disks = DiskList::Failed(error);
            }
            CommandMessage::InstallAccepted => {
                if self.install.phase == InstallPhase::Starting {
                    self.install.phase = InstallPhase::Monitoring;
                    self.install.status = "Installation in progress...".to_string();
                    self.open_subscription();
                }
            }
            CommandMessage::InstallRejected(error) => {
                self.install.phase = InstallPhase::Failed;
                self.install.status = "Installation failed to start".to_string();
                self.log_error("Installation failed to start", &error);
            }
            CommandMessage::Progress(event) => {
                self.apply_progress(event);
            }
            CommandMessage::ProgressFailed(error) => {
                self.close_subscription();
                if self.install.phase == InstallPhase::Monitoring {
                    self.install.phase = InstallPhase::Failed;
                    self.install.status = "Lost connection to installer".to_string();
                    self.log_error("Lost connection to installer", &error);
                }
            }
            CommandMessage::CompletionDue => {
                if self.install.phase == InstallPhase::Finishing
                    && self.wizard.step() == Step::Install
                {
                    self.install.phase = InstallPhase::Finished;
                    self.apply(wizard::force_advance(&self.wizard));
                }
            }
        }
        Ok(())
    }

    fn apply_progress(&mut self, event: ProgressEvent) {
        if self.install.phase != InstallPhase::Monitoring {
            tracing::debug!("Ignoring progress event outside monitoring: {:?}", event);
            return;
        }

        self.install.status = strip_ansi_codes(&event.status);
        self.install.progress = event.percent();
        self.append_log(&strip_ansi_codes(&event.message));

        if event.is_complete() {
            self.close_subscription();
            self.install.phase = InstallPhase::Finishing;
            if let Some(tx) = &self.cmd_tx {
                schedule_completion(tx.clone(), self.config.wizard.completion_delay());
            }
        }
    }

    /// One log entry per failure; the status line already names what failed
    fn log_error(&mut self, what: &str, error: &ParsedError) {
        tracing::error!("{}: {}", what, error.summary);
        if let Some(ref detail) = error.detail {
            tracing::error!("{}", detail);
        }
        tracing::info!("Suggestion: {}", error.suggestion);
        self.append_log(&format!("ERROR: {}", error.summary));
    }
}
