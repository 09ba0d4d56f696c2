//! File outputs requested via `--save_task_id_to` and `--save_report_to`.

use crate::api::{TaskId, TaskInfo};
use crate::error::{Result, ScanGateError};
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decode the base64 report body to text.
pub fn decode_report(report: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(report)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ScanGateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Artifact written");
    Ok(())
}

/// Write the literal task id to `path`.
pub(super) fn save_task_id(path: &Path, task_id: &TaskId) -> Result<()> {
    write_file(path, task_id.as_str())
}

/// Write the decoded report to `path`, plus the verbatim HTML report to
/// `<path>.html` when the server provided one.
pub(super) fn save_report(path: &Path, task_info: &TaskInfo) -> Result<()> {
    write_file(path, &decode_report(&task_info.report)?)?;

    if let Some(ref html) = task_info.html_report {
        write_file(&html_sibling(path), html)?;
    }
    Ok(())
}

fn html_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".html");
    PathBuf::from(name)
}
