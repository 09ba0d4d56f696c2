use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scan-gate",
    version,
    about = "Submits a security scan for a CI job and gates the pipeline on the audit verdict",
    long_about = "scan-gate creates a scan task on the security scan server for the git refs \
                  of a CI job, waits for the scan to finish, and exits non-zero when the audit \
                  verdict blocks the change."
)]
pub struct Cli {
    /// CI job payload as JSON; its `refs` field is sent to the scan server
    #[arg(long = "job_spec")]
    pub job_spec: String,

    /// Cache key from a previous scan of the same refs
    #[arg(long = "cached_key")]
    pub cached_key: Option<String>,

    /// Base URL of the security scan server
    #[arg(long = "base_url")]
    pub base_url: String,

    /// API token, sent verbatim in the Authorization header
    #[arg(long = "token")]
    pub token: String,

    /// File to write the created task id to
    #[arg(long = "save_task_id_to")]
    pub save_task_id_to: Option<PathBuf>,

    /// File to write the decoded report to; `<file>.html` is written alongside
    /// it when the server provides an HTML report
    #[arg(long = "save_report_to")]
    pub save_report_to: Option<PathBuf>,

    /// Seconds to wait between status polls
    #[arg(long, default_value_t = 5)]
    pub poll_interval_secs: u64,

    /// Give up after this many status polls (waits forever when unset)
    #[arg(long)]
    pub max_polls: Option<u32>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
