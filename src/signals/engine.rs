//! Rolling-mean crossover signal engine.

use crate::error::{JobError, JobResult};
use crate::indicators::rolling::rolling_mean;
use crate::models::signal::SignalReport;
use crate::models::table::PriceTable;
use crate::signals::aggregation::{derive_signals, signal_rate};
use tracing::debug;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute the rolling series, the binary signal and its rate.
    ///
    /// Fails with `JobError::Config` when the window cannot fit in the table,
    /// because no row would be eligible.
    pub fn compute(table: &PriceTable, window_size: usize) -> JobResult<SignalReport> {
        if window_size < 1 {
            return Err(JobError::Config(format!(
                "window_size must be >= 1, got {}",
                window_size
            )));
        }
        if window_size > table.len() {
            return Err(JobError::Config(format!(
                "window_size {} exceeds table length {}",
                window_size,
                table.len()
            )));
        }

        let rolling = rolling_mean(&table.values, window_size);
        debug!(window = window_size, "Rolling mean calculated");

        let signals = derive_signals(&table.values, &rolling);
        let eligible_rows = table.len() - window_size + 1;

        let rate = signal_rate(&signals).ok_or_else(|| {
            JobError::Config(format!(
                "No eligible rows for window_size {} over {} rows",
                window_size,
                table.len()
            ))
        })?;

        debug!(
            eligible = eligible_rows,
            signal_rate = rate,
            "Signals generated for {} eligible rows",
            eligible_rows
        );

        Ok(SignalReport {
            rolling,
            signals,
            signal_rate: rate,
            eligible_rows,
        })
    }
}
