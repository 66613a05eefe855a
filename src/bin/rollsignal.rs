//! Rolling-mean signal job
//!
//! Reads a price table, computes the signal rate and writes a metrics record.
//! Failures still produce a record; the exit code mirrors its status.

use clap::Parser;
use dotenvy::dotenv;
use rollsignal::config::ConfigOverrides;
use rollsignal::core::runner::{fail_early, run_job, JobArgs};
use rollsignal::logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "rollsignal", about = "Rolling-mean signal rate batch job")]
struct Cli {
    /// Input CSV file
    #[arg(long)]
    input: PathBuf,

    /// Config YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON file
    #[arg(long)]
    output: PathBuf,

    /// Log file path
    #[arg(long = "log-file")]
    log_file: PathBuf,

    /// Override the rolling window size
    #[arg(long, allow_negative_numbers = true)]
    window: Option<i64>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the required column name
    #[arg(long)]
    column: Option<String>,
}

fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_file) {
        logging::init_stdout_logging();
        warn!(error = %e, "Log file unavailable");
        fail_early(&e, &cli.output);
        return ExitCode::FAILURE;
    }

    let args = JobArgs {
        input: cli.input,
        config: cli.config,
        output: cli.output,
        log_file: cli.log_file,
        overrides: ConfigOverrides {
            window_size: cli.window,
            seed: cli.seed,
            required_column: cli.column,
        },
    };

    if run_job(&args).is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
