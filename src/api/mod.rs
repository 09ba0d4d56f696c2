//! Types and HTTP client for the security scan server API.

mod client;
mod types;

pub use client::ScanClient;
pub use types::{AuditStatus, ScanArgs, ScanStatus, TaskCreateRequest, TaskId, TaskInfo};
