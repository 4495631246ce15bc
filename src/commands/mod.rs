//! Background requests to the installer service
//!
//! Every request runs in its own tokio task and reports back to the UI loop
//! through [`CommandMessage`]s; the tasks never touch wizard state directly.

pub mod disks;
pub mod errors;
pub mod install;
pub mod reboot;
pub mod service;

use tokio::sync::mpsc;

use crate::api::{DiskDescriptor, ProgressEvent};
use errors::ParsedError;

/// Operation names used in error summaries
pub mod operations {
    pub const HEALTH: &str = "Contacting installer service";
    pub const DISKS: &str = "Loading disks";
    pub const INSTALL: &str = "Starting installation";
    pub const PROGRESS: &str = "Monitoring installation";
    pub const REBOOT: &str = "Rebooting";
}

/// Messages sent from background requests to the UI
#[derive(Debug, Clone)]
pub enum CommandMessage {
    /// Startup health check finished
    ServiceHealth { reachable: bool },
    /// Disk list fetched
    DisksLoaded(Vec<DiskDescriptor>),
    /// Disk list could not be fetched
    DisksFailed(ParsedError),
    /// Service accepted the installation request
    InstallAccepted,
    /// Installation request failed or was refused
    InstallRejected(ParsedError),
    /// Progress event from the subscription
    Progress(ProgressEvent),
    /// Subscription lost its connection
    ProgressFailed(ParsedError),
    /// Delay after the final progress event has elapsed
    CompletionDue,
}

/// Send a message to the UI, logging if the receiver is gone
pub(crate) async fn notify(tx: &mpsc::Sender<CommandMessage>, msg: CommandMessage) {
    if let Err(e) = tx.send(msg).await {
        tracing::warn!("Failed to send message to UI: {}", e);
    }
}
