//! Error types for scan-gate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a gate run.
///
/// Controlled failures (no task id, blocked audit) are not errors; they are
/// [`crate::RunOutcome`] variants so exit-code mapping stays at the process
/// boundary.
#[derive(Debug, Error)]
pub enum ScanGateError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request to the scan server failed at the transport level
    #[error("Request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The scan server returned a body we could not interpret
    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// `--job_spec` was not usable
    #[error("Invalid job_spec: {0}")]
    InvalidJobSpec(String),

    /// Writing a task-id or report file failed
    #[error("Failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan report was not valid base64
    #[error("Report is not valid base64")]
    ReportDecode(#[from] base64::DecodeError),

    /// `--max-polls` was reached before the scan finished
    #[error("Task {task_id} not finished after {polls} polls")]
    PollLimitExceeded { task_id: String, polls: u32 },
}

/// Result type alias for scan-gate operations.
pub type Result<T> = std::result::Result<T, ScanGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_response_display() {
        let err = ScanGateError::MalformedResponse {
            url: "http://scan.example/api/v1/task/create".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().contains("task/create"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_io_error_names_the_path() {
        let err = ScanGateError::Io {
            path: PathBuf::from("/tmp/report.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write /tmp/report.txt");
    }

    #[test]
    fn test_poll_limit_display() {
        let err = ScanGateError::PollLimitExceeded {
            task_id: "abc123".to_string(),
            polls: 3,
        };
        assert_eq!(err.to_string(), "Task abc123 not finished after 3 polls");
    }

    #[test]
    fn test_invalid_job_spec_display() {
        let err = ScanGateError::InvalidJobSpec("missing `refs` field".to_string());
        assert_eq!(err.to_string(), "Invalid job_spec: missing `refs` field");
    }
}
