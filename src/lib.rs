pub mod api;
pub mod cli;
pub mod error;
pub mod run;

pub use api::{AuditStatus, ScanClient, ScanStatus, TaskCreateRequest, TaskId, TaskInfo};
pub use cli::Cli;
pub use error::{Result, ScanGateError};
pub use run::{RunOutcome, run};
