//! Startup health check

use tokio::sync::mpsc;

use super::{notify, operations, CommandMessage};
use crate::api::ApiClient;

/// Check the service once; the result only feeds the welcome screen
pub fn start_health_check(client: ApiClient, tx: mpsc::Sender<CommandMessage>) {
    tokio::spawn(async move {
        let reachable = match client.health().await {
            Ok(health) => {
                tracing::info!(
                    "Installer service {} is {}",
                    health.service.as_deref().unwrap_or("(unnamed)"),
                    health.status
                );
                true
            }
            Err(e) => {
                tracing::warn!("{} at {} failed: {}", operations::HEALTH, client.base_url(), e);
                false
            }
        };
        notify(&tx, CommandMessage::ServiceHealth { reachable }).await;
    });
}
