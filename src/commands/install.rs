//! Installation start and progress monitoring
//!
//! The install request is a single POST. Once accepted, a
//! [`ProgressSubscription`] streams events back to the UI until the UI closes
//! it, either after the final event or after a connection error.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::errors::{ErrorContext, ParsedError};
use super::{notify, operations, CommandMessage};
use crate::api::{ApiClient, ApiError, InstallationRequest};

/// Submit the installation request in the background
pub fn start_install(
    client: ApiClient,
    request: InstallationRequest,
    tx: mpsc::Sender<CommandMessage>,
) {
    tokio::spawn(async move {
        let msg = match client.start_install(&request).await {
            Ok(()) => {
                tracing::info!("Installation accepted by service");
                CommandMessage::InstallAccepted
            }
            Err(e) => {
                tracing::error!("Installation failed to start: {}", e);
                CommandMessage::InstallRejected(parse(&e, operations::INSTALL, &client))
            }
        };
        notify(&tx, msg).await;
    });
}

/// Running progress subscription; dropping or closing it stops the stream
pub struct ProgressSubscription {
    handle: JoinHandle<()>,
}

impl ProgressSubscription {
    pub fn open(client: ApiClient, tx: mpsc::Sender<CommandMessage>) -> Self {
        tracing::info!("Opening progress subscription");
        let handle = tokio::spawn(async move {
            run_subscription(&client, &tx).await;
        });
        Self { handle }
    }

    pub fn close(self) {
        tracing::info!("Closing progress subscription");
        // Drop aborts the reader task
    }
}

impl Drop for ProgressSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Forward events until the final one or the first connection error
async fn run_subscription(client: &ApiClient, tx: &mpsc::Sender<CommandMessage>) {
    let mut stream = match client.open_progress().await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::error!("Failed to open progress stream: {}", e);
            notify(tx, failure(&e, client)).await;
            return;
        }
    };

    loop {
        match stream.next_event().await {
            Some(Ok(event)) => {
                let complete = event.is_complete();
                tracing::debug!("Progress {}%: {}", event.progress, event.status);
                notify(tx, CommandMessage::Progress(event)).await;
                if complete {
                    return;
                }
            }
            Some(Err(ApiError::Decode(e))) => {
                tracing::warn!("Skipping malformed progress event: {}", e);
            }
            Some(Err(e)) => {
                tracing::error!("Progress stream failed: {}", e);
                notify(tx, failure(&e, client)).await;
                return;
            }
            None => {
                tracing::error!("Progress stream ended before completion");
                notify(tx, failure(&ApiError::StreamClosed, client)).await;
                return;
            }
        }
    }
}

/// Send [`CommandMessage::CompletionDue`] after `delay`
pub fn schedule_completion(tx: mpsc::Sender<CommandMessage>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        notify(&tx, CommandMessage::CompletionDue).await;
    });
}

fn failure(err: &ApiError, client: &ApiClient) -> CommandMessage {
    CommandMessage::ProgressFailed(parse(err, operations::PROGRESS, client))
}

fn parse(err: &ApiError, operation: &str, client: &ApiClient) -> ParsedError {
    ParsedError::from_api(
        err,
        ErrorContext {
            operation,
            base_url: client.base_url(),
        },
    )
}
