//! Disk list fetch

use tokio::sync::mpsc;

use super::errors::{ErrorContext, ParsedError};
use super::{notify, operations, CommandMessage};
use crate::api::ApiClient;

/// Fetch the disk list in the background
pub fn start_disk_load(client: ApiClient, tx: mpsc::Sender<CommandMessage>) {
    tokio::spawn(async move {
        let msg = match client.list_disks().await {
            Ok(disks) => {
                tracing::info!("Service offered {} disk(s)", disks.len());
                CommandMessage::DisksLoaded(disks)
            }
            Err(e) => {
                tracing::error!("Failed to load disks: {}", e);
                CommandMessage::DisksFailed(ParsedError::from_api(
                    &e,
                    ErrorContext {
                        operation: operations::DISKS,
                        base_url: client.base_url(),
                    },
                ))
            }
        };
        notify(&tx, msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[tokio::test]
    async fn test_unreachable_service_reports_failure() {
        let config = ServiceConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ServiceConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        start_disk_load(client, tx);

        match rx.recv().await.unwrap() {
            CommandMessage::DisksFailed(err) => {
                assert!(err.summary.starts_with("Loading disks"));
                assert!(err.suggestion.contains("http://127.0.0.1:9"));
            }
            other => panic!("Expected DisksFailed, got {:?}", other),
        }
    }
}
