//! Wire types for the scan server's task API.
//!
//! The formats here are dictated by the server; field names and status
//! numbering follow its contract exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trigger source reported to the server for CI-initiated scans.
pub const TASK_SOURCE_CI: &str = "ci";

/// Body of `POST /api/v1/task/create`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreateRequest {
    /// Source-control refs to scan, passed through from the CI job spec verbatim.
    pub git_refs: serde_json::Value,
    /// Cache reference from a previous scan of the same refs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_key: Option<String>,
    pub scan_args: ScanArgs,
}

/// Scan options attached to a create request.
#[derive(Debug, Clone, Serialize)]
pub struct ScanArgs {
    pub task_source: String,
}

impl TaskCreateRequest {
    /// Build a create request for a CI-triggered scan.
    pub fn for_ci(git_refs: serde_json::Value, cached_key: Option<String>) -> Self {
        Self {
            git_refs,
            cached_key,
            scan_args: ScanArgs {
                task_source: TASK_SOURCE_CI.to_string(),
            },
        }
    }
}

/// Identifier of a scan task.
///
/// The server returns either a string or a number in the `data` field;
/// both are kept in their literal string form. An empty id means task
/// creation failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            serde_json::Value::Null => Ok(Self(String::new())),
            other => Err(serde::de::Error::custom(format!(
                "task id must be a string or number, got {other}"
            ))),
        }
    }
}

/// Lifecycle stage of a scan task.
///
/// Known values: 1 queued, 2 scanning, 3 failed, 4 success. The terminal
/// rule is defined on the raw value so statuses the server adds later
/// still end the wait loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanStatus(pub u8);

impl ScanStatus {
    pub const QUEUED: Self = Self(1);
    pub const SCANNING: Self = Self(2);
    pub const FAILED: Self = Self(3);
    pub const SUCCESS: Self = Self(4);

    /// The scan has left the queued/scanning phase, for better or worse.
    pub fn is_terminal(self) -> bool {
        self.0 > 2
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::QUEUED => f.write_str("queued"),
            Self::SCANNING => f.write_str("scanning"),
            Self::FAILED => f.write_str("failed"),
            Self::SUCCESS => f.write_str("success"),
            Self(other) => write!(f, "unknown({other})"),
        }
    }
}

/// Policy verdict attached to a completed scan.
///
/// Known values: 1 blocked, 2 pass, 3 watched, 4 not enabled. Only
/// `blocked` fails the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditStatus(pub u8);

impl AuditStatus {
    pub const BLOCKED: Self = Self(1);
    pub const PASS: Self = Self(2);
    pub const WATCHED: Self = Self(3);
    pub const NOT_ENABLED: Self = Self(4);

    pub fn is_blocked(self) -> bool {
        self == Self::BLOCKED
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BLOCKED => f.write_str("blocked"),
            Self::PASS => f.write_str("pass"),
            Self::WATCHED => f.write_str("watched"),
            Self::NOT_ENABLED => f.write_str("not enabled"),
            Self(other) => write!(f, "unknown({other})"),
        }
    }
}

/// State of a scan task as returned by `GET /api/v1/task/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskInfo {
    pub scan_status: ScanStatus,
    /// Absent while the scan is still running.
    #[serde(default)]
    pub audit_status: AuditStatus,
    /// Base64-encoded report text.
    #[serde(default)]
    pub report: String,
    /// Raw HTML rendering of the report, when the server produces one.
    #[serde(default)]
    pub html_report: Option<String>,
}
