//! Installer service HTTP client
//!
//! Thin typed wrapper over the service's REST endpoints and its server-push
//! progress stream:
//! - `GET  /api/health`
//! - `GET  /api/disks`
//! - `POST /api/install`
//! - `GET  /api/install/progress` (event stream)
//! - `POST /api/reboot`

mod error;
mod sse;
mod types;

pub use error::ApiError;
pub use types::{DiskDescriptor, HealthStatus, InstallationRequest, ProgressEvent};

use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::constants::USER_AGENT;
use sse::SseDecoder;
use types::ErrorBody;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the installer service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|_| ApiError::InvalidUrl(config.base_url.clone()))?;

        // No client-wide timeout: it would also cut off the progress stream
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            request_timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the service health endpoint
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(self.url("/api/health"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    /// Fetch the disks available as installation targets
    pub async fn list_disks(&self) -> Result<Vec<DiskDescriptor>> {
        tracing::info!("Fetching disk list from {}", self.base_url);
        let response = self
            .client
            .get(self.url("/api/disks"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        decode_json(check_status(response).await?).await
    }

    /// Submit the installation request. Only a 2xx response counts as started.
    pub async fn start_install(&self, request: &InstallationRequest) -> Result<()> {
        tracing::info!(
            "Requesting installation on {} for user {}",
            request.disk,
            request.username
        );
        let response = self
            .client
            .post(self.url("/api/install"))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Open the progress event stream
    pub async fn open_progress(&self) -> Result<ProgressStream> {
        let response = self
            .client
            .get(self.url("/api/install/progress"))
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(ProgressStream::new(response))
    }

    /// Ask the service to reboot the machine
    pub async fn reboot(&self) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/reboot"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the server's message
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .map(|body| body.error);

    tracing::warn!("Service returned {}: {:?}", status, message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Live progress event stream
pub struct ProgressStream {
    body: BoxStream<'static, reqwest::Result<Vec<u8>>>,
    decoder: SseDecoder,
}

impl ProgressStream {
    fn new(response: Response) -> Self {
        Self {
            body: response
                .bytes_stream()
                .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
                .boxed(),
            decoder: SseDecoder::new(),
        }
    }

    /// Wait for the next event.
    ///
    /// Returns `None` when the service closes the stream. A payload that isn't a
    /// valid progress event yields `Err(ApiError::Decode)` without ending the stream.
    pub async fn next_event(&mut self) -> Option<Result<ProgressEvent>> {
        loop {
            if let Some(payload) = self.decoder.next_payload() {
                return Some(serde_json::from_str(&payload).map_err(ApiError::from));
            }
            match self.body.next().await {
                Some(Ok(chunk)) => self.decoder.push(&chunk),
                Some(Err(e)) => return Some(Err(e.into())),
                None => return None,
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{event_stream, response, serve_once};
    use super::*;

    fn client_for(base_url: &str) -> ApiClient {
        let config = ServiceConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        };
        ApiClient::new(&config).unwrap()
    }

    fn sample_request() -> InstallationRequest {
        InstallationRequest {
            language: "en_US.UTF-8".to_string(),
            timezone: "UTC".to_string(),
            disk: "/dev/sda".to_string(),
            fullname: "Alice".to_string(),
            username: "alice".to_string(),
            password: "pass12".to_string(),
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(matches!(ApiClient::new(&config), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = client_for("http://127.0.0.1:3000/");
        assert_eq!(client.url("/api/disks"), "http://127.0.0.1:3000/api/disks");
    }

    #[tokio::test]
    async fn test_list_disks() {
        let body = r#"[{"device":"/dev/sda","model":"WD Blue HDD","size":1000000000000},{"device":"/dev/nvme0n1","model":null,"size":1073741824}]"#;
        let (url, request) = serve_once(response("200 OK", "application/json", body)).await;

        let disks = client_for(&url).list_disks().await.unwrap();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].device, "/dev/sda");
        assert_eq!(disks[1].model_label(), "Unknown Model");
        assert_eq!(disks[1].size_label(), "1 GB");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/disks "));
    }

    #[tokio::test]
    async fn test_list_disks_server_error() {
        let body = r#"{"error": "Failed to get disk information"}"#;
        let (url, _request) =
            serve_once(response("500 Internal Server Error", "application/json", body)).await;

        match client_for(&url).list_disks().await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message.as_deref(), Some("Failed to get disk information"));
            }
            other => panic!("expected status error, got {:?}", other.map(|d| d.len())),
        }
    }

    #[tokio::test]
    async fn test_start_install_sends_json_body() {
        let (url, request) = serve_once(response(
            "200 OK",
            "application/json",
            r#"{"status": "Installation started"}"#,
        ))
        .await;

        client_for(&url).start_install(&sample_request()).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/install "));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#""username":"alice""#));
        assert!(request.contains(r#""disk":"/dev/sda""#));
    }

    #[tokio::test]
    async fn test_start_install_rejected() {
        let body = r#"{"error": "Installation already in progress"}"#;
        let (url, _request) = serve_once(response("400 Bad Request", "application/json", body)).await;

        let err = client_for(&url)
            .start_install(&sample_request())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "service returned HTTP 400: Installation already in progress"
        );
    }

    #[tokio::test]
    async fn test_progress_stream_delivers_events_in_order() {
        let (url, request) = serve_once(event_stream(&[
            r#"{"status": "Preparing disk...", "progress": 10, "message": "Partitioning"}"#,
            r#"{"status": "Installing base system...", "progress": 55, "message": "debootstrap"}"#,
            r#"{"status": "Installation complete", "progress": 100, "message": "Done"}"#,
        ]))
        .await;

        let mut stream = client_for(&url).open_progress().await.unwrap();
        let mut seen = Vec::new();
        while let Some(event) = stream.next_event().await {
            seen.push(event.unwrap().progress);
        }
        assert_eq!(seen, vec![10, 55, 100]);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/install/progress "));
    }

    #[tokio::test]
    async fn test_progress_stream_reports_bad_payload() {
        let (url, _request) = serve_once(event_stream(&[
            "not json",
            r#"{"status": "ok", "progress": 20, "message": "m"}"#,
        ]))
        .await;

        let mut stream = client_for(&url).open_progress().await.unwrap();
        assert!(matches!(stream.next_event().await, Some(Err(ApiError::Decode(_)))));
        assert_eq!(stream.next_event().await.unwrap().unwrap().progress, 20);
        assert!(stream.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Nothing listens on the discard port
        let err = client_for("http://127.0.0.1:9").list_disks().await.unwrap_err();
        assert!(err.is_unreachable());
    }
}
