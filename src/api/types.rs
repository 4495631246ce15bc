//! Wire types exchanged with the installer service

use serde::{Deserialize, Serialize};

/// Size unit labels for [`format_bytes`]
const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// A storage device offered by the service as an installation target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiskDescriptor {
    pub device: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub size: u64,
}

impl DiskDescriptor {
    /// Model name, or a placeholder when the service didn't report one
    pub fn model_label(&self) -> &str {
        match self.model.as_deref().map(str::trim) {
            Some(model) if !model.is_empty() => model,
            _ => "Unknown Model",
        }
    }

    pub fn size_label(&self) -> String {
        format_bytes(self.size)
    }
}

/// User choices submitted to start the installation job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationRequest {
    pub language: String,
    pub timezone: String,
    pub disk: String,
    pub fullname: String,
    pub username: String,
    pub password: String,
}

/// One status update pushed by the service while installing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressEvent {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub message: String,
}

impl ProgressEvent {
    /// Progress clamped to a valid percentage
    pub fn percent(&self) -> u16 {
        self.progress.min(100) as u16
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}

/// Response of the health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

/// Error body returned by the service on failures
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Format a byte count with binary prefixes, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are rounded to two decimals with trailing zeros dropped; anything
/// beyond terabytes stays in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < SIZE_UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / scale as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(1000), "1000 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_073_741_824), "1 GB");
        assert_eq!(format_bytes(500_000_000_000), "465.66 GB");
        assert_eq!(format_bytes(1_000_000_000_000), "931.32 GB");
    }

    #[test]
    fn test_format_bytes_caps_at_terabytes() {
        let five_pb = 5 * 1024u64.pow(5);
        assert_eq!(format_bytes(five_pb), "5120 TB");
    }

    #[test]
    fn test_disk_descriptor_parsing() {
        let json = r#"[
            {"device": "/dev/sda", "model": "Samsung SSD 970 EVO", "size": 500000000000},
            {"device": "/dev/sdb", "size": 1024}
        ]"#;
        let disks: Vec<DiskDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].model_label(), "Samsung SSD 970 EVO");
        assert_eq!(disks[1].model_label(), "Unknown Model");
        assert_eq!(disks[1].size_label(), "1 KB");
    }

    #[test]
    fn test_blank_model_uses_placeholder() {
        let disk: DiskDescriptor =
            serde_json::from_str(r#"{"device": "/dev/vda", "model": "  ", "size": 0}"#).unwrap();
        assert_eq!(disk.model_label(), "Unknown Model");
    }

    #[test]
    fn test_progress_event_percent() {
        let event: ProgressEvent =
            serde_json::from_str(r#"{"status": "Done", "progress": 140, "message": "x"}"#)
                .unwrap();
        assert_eq!(event.percent(), 100);
        assert!(event.is_complete());

        let partial: ProgressEvent = serde_json::from_str(r#"{"progress": 20}"#).unwrap();
        assert_eq!(partial.percent(), 20);
        assert!(!partial.is_complete());
        assert!(partial.message.is_empty());
    }

    #[test]
    fn test_installation_request_field_names() {
        let request = InstallationRequest {
            language: "en_US.UTF-8".to_string(),
            timezone: "UTC".to_string(),
            disk: "/dev/sda".to_string(),
            fullname: "Alice Example".to_string(),
            username: "alice".to_string(),
            password: "secret1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        for field in ["language", "timezone", "disk", "fullname", "username", "password"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["disk"], "/dev/sda");
    }
}
