//! Logging initialization with environment-based formatters
//!
//! Every line goes to two sinks:
//! - stdout: structured JSON in production, colourful human-readable otherwise
//! - the run's log file: plain timestamped lines, appended across runs

use crate::config::get_environment;
use crate::error::{JobError, JobResult};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

fn stdout_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    if is_production() {
        // Production: Structured JSON logs
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(std::io::stdout)
            .boxed()
    }
}

fn open_log_file(log_path: &Path) -> JobResult<File> {
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| JobError::io("create directory", parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| JobError::io("open log file", log_path, e))
}

/// Build the stdout + file subscriber without installing it.
pub fn build_subscriber(log_path: &Path) -> JobResult<impl Subscriber + Send + Sync + 'static> {
    let file = open_log_file(log_path)?;

    Ok(tracing_subscriber::registry()
        .with(stdout_layer())
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter()))
}

/// Install the stdout + file subscriber as the global default.
pub fn init_logging(log_path: &Path) -> JobResult<()> {
    build_subscriber(log_path)?
        .try_init()
        .map_err(|e| JobError::Io(format!("Failed to install logger: {}", e)))
}

/// Stdout-only fallback for when the log file cannot be opened.
pub fn init_stdout_logging() {
    let _ = tracing_subscriber::registry()
        .with(stdout_layer())
        .with(env_filter())
        .try_init();
}
