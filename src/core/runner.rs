//! Sequential job runner: config → load → compute → report.

use crate::config::{resolve_config, ConfigOverrides, ResolvedConfig, DEFAULT_VERSION};
use crate::core::context::RunContext;
use crate::data::loader::load_table;
use crate::error::{JobError, JobResult};
use crate::metrics::reporter::{MetricsReporter, PartialContext};
use crate::models::metrics::MetricsRecord;
use crate::models::signal::SignalReport;
use crate::signals::engine::SignalEngine;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

/// Process-boundary parameters of one invocation.
#[derive(Debug, Clone)]
pub struct JobArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub output: PathBuf,
    pub log_file: PathBuf,
    pub overrides: ConfigOverrides,
}

/// Result of a run: the record that was produced and whether it reached disk.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub record: MetricsRecord,
    pub written: bool,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        self.written && self.record.is_success()
    }
}

/// Resolve configuration, then run the pipeline.
///
/// Never panics and never returns an error: every failure ends up as an
/// error-shaped record at `args.output`.
pub fn run_job(args: &JobArgs) -> JobOutcome {
    info!("Job started");

    let config = match resolve_config(
        args.config.as_deref(),
        &args.overrides,
        &args.output,
        &args.log_file,
    ) {
        Ok(config) => config,
        Err(e) => return fail_early(&e, &args.output),
    };

    info!(
        seed = config.seed,
        window = config.window_size,
        column = %config.required_column,
        version = %config.version,
        "Config loaded: seed={}, window={}, version={}",
        config.seed,
        config.window_size,
        config.version
    );

    JobRunner::new(config).run(&args.input)
}

pub struct JobRunner {
    context: RunContext,
}

impl JobRunner {
    /// Seeds the run's RNG; this happens before any stage executes.
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            context: RunContext::new(config),
        }
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn run(&self, input: &Path) -> JobOutcome {
        let config = &self.context.config;
        let mut rows_loaded = None;

        let started = Instant::now();
        let result = self.execute(input, &mut rows_loaded);
        let latency_ms = elapsed_ms(started);

        let record = match result {
            Ok(report) => {
                let rows = rows_loaded.unwrap_or(report.rolling.len());
                info!(
                    signal_rate = report.signal_rate,
                    rows_processed = rows,
                    "Metrics: signal_rate={:.4}, rows_processed={}",
                    report.signal_rate,
                    rows
                );
                MetricsReporter::report(
                    &config.version,
                    rows,
                    report.signal_rate,
                    latency_ms,
                    config.seed,
                )
            }
            Err(e) => MetricsReporter::report_error(
                DEFAULT_VERSION,
                &e,
                PartialContext {
                    rows_processed: rows_loaded,
                    latency_ms: Some(latency_ms),
                    seed: Some(config.seed),
                },
            ),
        };

        finish(record, &config.output_path)
    }

    fn execute(&self, input: &Path, rows_loaded: &mut Option<usize>) -> JobResult<SignalReport> {
        let config = &self.context.config;

        info!(input = %input.display(), "Loading data");
        let table = load_table(input, &config.required_column, config.delimiter)?;
        *rows_loaded = Some(table.len());
        info!(rows = table.len(), "Data loaded: {} rows", table.len());

        info!(
            window = config.window_size,
            "Computing rolling mean with window={}",
            config.window_size
        );
        let report = SignalEngine::compute(&table, config.window_size)?;
        info!(
            eligible_rows = report.eligible_rows,
            positive_rows = report.positive_rows(),
            "Signals generated"
        );
        Ok(report)
    }
}

fn finish(record: MetricsRecord, output: &Path) -> JobOutcome {
    match MetricsReporter::emit(&record, output) {
        Ok(()) => JobOutcome {
            record,
            written: true,
        },
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Failed to write metrics record");
            JobOutcome {
                record,
                written: false,
            }
        }
    }
}

/// Write an error record for a failure that happened before a resolved
/// configuration existed, such as a bad config file or an unusable log sink.
pub fn fail_early(err: &JobError, output: &Path) -> JobOutcome {
    let record = MetricsReporter::report_error(DEFAULT_VERSION, err, PartialContext::default());
    finish(record, output)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
