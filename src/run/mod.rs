//! Gate orchestration: create the scan task, wait for it, persist
//! artifacts, and derive the verdict.

mod artifacts;

pub use artifacts::decode_report;

use crate::api::{AuditStatus, ScanClient, TaskCreateRequest};
use crate::cli::Cli;
use crate::error::{Result, ScanGateError};
use colored::Colorize;
use tracing::info;

/// Terminal outcome of a gate run.
///
/// Exit-code mapping happens in `main`; nothing below it terminates the
/// process.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The audit verdict lets the pipeline proceed.
    Passed { audit_status: AuditStatus },
    /// The audit blocked the change. Carries the report in both the wire
    /// (base64) and decoded form for error output.
    Blocked { report: String, decoded: String },
    /// The server returned no task id.
    CreationFailed,
}

/// Extract the `refs` field from a CI job spec.
pub fn git_refs_from_job_spec(job_spec: &str) -> Result<serde_json::Value> {
    let spec: serde_json::Value = serde_json::from_str(job_spec)
        .map_err(|e| ScanGateError::InvalidJobSpec(e.to_string()))?;
    spec.get("refs")
        .cloned()
        .ok_or_else(|| ScanGateError::InvalidJobSpec("missing `refs` field".to_string()))
}

/// Run the gate end to end.
pub async fn run(cli: &Cli, client: &ScanClient) -> Result<RunOutcome> {
    let git_refs = git_refs_from_job_spec(&cli.job_spec)?;
    let payload = TaskCreateRequest::for_ci(git_refs, cli.cached_key.clone());

    let task_id = client.create_task(&payload).await?;
    println!("Scan task id: {}", task_id.as_str().green());
    if task_id.is_empty() {
        return Ok(RunOutcome::CreationFailed);
    }

    let task_info = client.wait_task(&task_id).await?;
    println!(
        "Task finished: scan {} / audit {}",
        task_info.scan_status.to_string().yellow(),
        task_info.audit_status.to_string().yellow()
    );

    if let Some(ref path) = cli.save_task_id_to {
        artifacts::save_task_id(path, &task_id)?;
    }
    if let Some(ref path) = cli.save_report_to {
        artifacts::save_report(path, &task_info)?;
    }

    if task_info.audit_status.is_blocked() {
        let decoded = decode_report(&task_info.report)?;
        return Ok(RunOutcome::Blocked {
            report: task_info.report,
            decoded,
        });
    }

    info!(audit_status = %task_info.audit_status, "Audit passed the gate");
    Ok(RunOutcome::Passed {
        audit_status: task_info.audit_status,
    })
}
