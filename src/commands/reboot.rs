//! Fire-and-forget reboot request

use super::operations;
use crate::api::ApiClient;

/// Ask the service to reboot. The outcome only reaches the diagnostic log.
pub fn start_reboot(client: ApiClient) {
    tokio::spawn(async move {
        match client.reboot().await {
            Ok(()) => tracing::info!("Reboot requested"),
            Err(e) => tracing::error!("{} failed: {}", operations::REBOOT, e),
        }
    });
}
