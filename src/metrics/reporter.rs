//! Builds the metrics record and writes it to the output sink.

use crate::error::{JobError, JobResult};
use crate::models::metrics::{ErrorRecord, MetricsRecord, RunStatus, SuccessRecord, METRIC_NAME};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Decimal places kept for the reported metric value.
pub const VALUE_PRECISION: i32 = 4;

/// Whatever was known about the run before it failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialContext {
    pub rows_processed: Option<usize>,
    pub latency_ms: Option<u64>,
    pub seed: Option<u64>,
}

pub struct MetricsReporter;

impl MetricsReporter {
    pub fn report(
        version: &str,
        rows_processed: usize,
        summary: f64,
        latency_ms: u64,
        seed: u64,
    ) -> MetricsRecord {
        MetricsRecord::Success(SuccessRecord {
            version: version.to_string(),
            rows_processed,
            metric: METRIC_NAME.to_string(),
            value: round_value(summary),
            latency_ms,
            seed,
            status: RunStatus::Success,
        })
    }

    pub fn report_error(version: &str, err: &JobError, partial: PartialContext) -> MetricsRecord {
        MetricsRecord::Error(ErrorRecord {
            version: version.to_string(),
            status: RunStatus::Error,
            error_type: err.kind().to_string(),
            message: err.to_string(),
            rows_processed: partial.rows_processed,
            latency_ms: partial.latency_ms,
            seed: partial.seed,
        })
    }

    /// Overwrite `output_path` with the record and mirror it to stdout.
    pub fn emit(record: &MetricsRecord, output_path: &Path) -> JobResult<()> {
        let json = record
            .to_json_pretty()
            .map_err(|e| JobError::Io(format!("Failed to serialize metrics: {}", e)))?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| JobError::io("create directory", parent, e))?;
        }
        fs::write(output_path, format!("{}\n", json))
            .map_err(|e| JobError::io("write", output_path, e))?;

        println!("{}", json);

        match record {
            MetricsRecord::Success(r) => info!(
                output = %output_path.display(),
                signal_rate = r.value,
                rows = r.rows_processed,
                latency_ms = r.latency_ms,
                "Job completed successfully in {}ms",
                r.latency_ms
            ),
            MetricsRecord::Error(r) => error!(
                output = %output_path.display(),
                error_type = %r.error_type,
                "Job failed: {}",
                r.message
            ),
        }
        Ok(())
    }
}

/// Round half away from zero to `VALUE_PRECISION` places.
pub fn round_value(value: f64) -> f64 {
    let factor = 10f64.powi(VALUE_PRECISION);
    (value * factor).round() / factor
}
