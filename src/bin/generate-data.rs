//! Synthetic price series generator
//!
//! Writes a `timestamp,close` CSV whose content is fully determined by the seed.

use clap::Parser;
use dotenvy::dotenv;
use rollsignal::config::ResolvedConfig;
use rollsignal::core::context::RunContext;
use rollsignal::data::synthetic::{generate_random_walk, write_bars};
use rollsignal::logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "generate-data", about = "Generate a seeded synthetic price CSV")]
struct Cli {
    /// Output CSV file
    #[arg(long)]
    output: PathBuf,

    /// Log file path
    #[arg(long = "log-file", default_value = "generate-data.log")]
    log_file: PathBuf,

    /// Number of rows to generate
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 100.0)]
    start_price: f64,

    /// Maximum absolute per-row return
    #[arg(long, default_value_t = 0.01)]
    volatility: f64,
}

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(&cli.log_file) {
        logging::init_stdout_logging();
        warn!(error = %e, "Log file unavailable, logging to stdout only");
    }

    let config = ResolvedConfig::with_defaults(&cli.output, &cli.log_file).with_seed(cli.seed);
    let mut ctx = RunContext::new(config);

    let result = generate_random_walk(&mut ctx.rng, cli.rows, cli.start_price, cli.volatility)
        .and_then(|bars| {
            write_bars(&bars, &cli.output, ctx.config.delimiter)?;
            Ok(bars.len())
        });

    match result {
        Ok(rows) => {
            info!(rows, seed = cli.seed, output = %cli.output.display(), "Synthetic data written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Synthetic data generation failed");
            ExitCode::FAILURE
        }
    }
}
