use thiserror::Error;

/// Errors talking to the installer service
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid service URL '{0}'")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned HTTP {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("progress stream closed before the installation finished")]
    StreamClosed,
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// True when the service could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_connect())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }
}
