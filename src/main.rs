//! dbstatus - minimal JSON HTTP status API over a relational database.
//!
//! Startup order matters: flags first (the debug flag shapes the log
//! filter), then logging, then the lifecycle coordinator owns everything
//! up to process exit.

use std::process::ExitCode;

use clap::Parser;

use dbstatus::config::Cli;
use dbstatus::lifecycle::RunOutcome;
use dbstatus::{lifecycle, observability};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.debug;

    observability::logging::init(debug);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration resolution failed");
            return ExitCode::FAILURE;
        }
    };

    match lifecycle::run(config).await {
        RunOutcome::Graceful => ExitCode::SUCCESS,
        RunOutcome::Fatal => ExitCode::FAILURE,
    }
}
