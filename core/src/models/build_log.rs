//! Build log models

use serde::{Deserialize, Serialize};

/// Severity of a build log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Info,
    Success,
    Warning,
    Error,
}

/// Which canned build script the log viewer replays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Git-based CI/CD deployment
    Git,

    /// Manual drag-and-drop upload
    Manual,
}

/// A single build log line. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Clock label, e.g. "14:20:01"
    pub timestamp: String,

    /// Log message
    pub message: String,

    /// Severity
    pub severity: LogSeverity,
}

impl LogLine {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>, severity: LogSeverity) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
            severity,
        }
    }
}
