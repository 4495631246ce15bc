//! API error categorization
//!
//! Turns failures talking to the installer service into user-friendly
//! messages with actionable suggestions.

use crate::api::ApiError;

/// Parsed error with user-friendly information
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedError {
    /// Short summary (one line)
    pub summary: String,
    /// Longer description if available
    pub detail: Option<String>,
    /// User-friendly suggestion
    pub suggestion: String,
}

/// Context about what operation was running
pub struct ErrorContext<'a> {
    pub operation: &'a str,
    pub base_url: &'a str,
}

impl ParsedError {
    /// Categorize an API error
    pub fn from_api(err: &ApiError, context: ErrorContext) -> Self {
        match err {
            ApiError::Transport(_) if err.is_unreachable() => Self {
                summary: format!("{}: installer service unreachable", context.operation),
                detail: Some(err.to_string()),
                suggestion: format!(
                    "Check that the installer service is running at {}.",
                    context.base_url
                ),
            },
            ApiError::Transport(_) if err.is_timeout() => Self {
                summary: format!("{}: request timed out", context.operation),
                detail: Some(err.to_string()),
                suggestion: "The service may be busy. Try again in a moment.".to_string(),
            },
            ApiError::Status {
                status,
                message: Some(message),
            } => Self {
                summary: format!("{}: {}", context.operation, message),
                detail: Some(format!("HTTP {}", status)),
                suggestion: "Check the installer service log for details.".to_string(),
            },
            ApiError::Status {
                status,
                message: None,
            } => Self {
                summary: format!("{}: service returned HTTP {}", context.operation, status),
                detail: None,
                suggestion: "Check the installer service log for details.".to_string(),
            },
            ApiError::Decode(e) => Self {
                summary: format!("{}: unexpected response from service", context.operation),
                detail: Some(e.to_string()),
                suggestion: "The installer service may be a different version.".to_string(),
            },
            _ => Self::generic(err, context),
        }
    }

    fn generic(err: &ApiError, context: ErrorContext) -> Self {
        Self {
            summary: format!("{} failed", context.operation),
            detail: Some(err.to_string()),
            suggestion: "Check the diagnostic log for details.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ErrorContext<'static> {
        ErrorContext {
            operation: "Loading disks",
            base_url: "http://127.0.0.1:3000",
        }
    }

    #[test]
    fn test_status_with_server_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some("Failed to get disk information".to_string()),
        };
        let parsed = ParsedError::from_api(&err, context());
        assert_eq!(parsed.summary, "Loading disks: Failed to get disk information");
        assert_eq!(parsed.detail.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_status_without_message() {
        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        let parsed = ParsedError::from_api(&err, context());
        assert_eq!(parsed.summary, "Loading disks: service returned HTTP 502");
        assert!(parsed.detail.is_none());
    }

    #[test]
    fn test_decode_error() {
        let json_err = serde_json::from_str::<u32>("oops").unwrap_err();
        let parsed = ParsedError::from_api(&ApiError::Decode(json_err), context());
        assert!(parsed.summary.contains("unexpected response"));
    }

    #[test]
    fn test_stream_closed_is_generic() {
        let parsed = ParsedError::from_api(&ApiError::StreamClosed, context());
        assert_eq!(parsed.summary, "Loading disks failed");
        assert!(parsed.detail.unwrap().contains("stream closed"));
    }
}
