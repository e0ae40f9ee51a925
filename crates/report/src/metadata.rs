//! Header block for file reports

use serde::{Deserialize, Serialize};
use wlankey_core::TIMESTAMP_FORMAT;

/// Context printed above the entries in block mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub host: String,
    pub os: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ReportMetadata {
    /// Capture the current time and describe the local machine
    pub fn collect(note: Option<String>) -> Self {
        let host = whoami::fallible::hostname().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "host name unavailable");
            "unknown".to_string()
        });

        Self {
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            host,
            os: whoami::distro(),
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }
}
