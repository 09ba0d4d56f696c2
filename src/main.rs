use clap::Parser;
use colored::Colorize;
use scan_gate::{Cli, RunOutcome, ScanClient, run};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let client = match ScanClient::new(&cli.base_url, &cli.token) {
        Ok(client) => client
            .with_poll_interval(Duration::from_secs(cli.poll_interval_secs))
            .with_max_polls(cli.max_polls),
        Err(e) => {
            eprintln!("Failed to set up scan client: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&cli, &client).await {
        Ok(RunOutcome::Passed { audit_status }) => {
            println!("{} {}", "Audit status:".green(), audit_status);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Blocked { report, decoded }) => {
            eprintln!("{} blocked", "Audit status:".red());
            eprintln!("Report:\n{report}");
            eprintln!("Report decoded:\n{decoded}");
            ExitCode::from(1)
        }
        Ok(RunOutcome::CreationFailed) => {
            eprintln!("Task creation failed: the server returned no task id");
            ExitCode::from(1)
        }
        Err(e) => {
            eprint!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprint!(": {cause}");
                source = cause.source();
            }
            eprintln!();
            ExitCode::from(2)
        }
    }
}
