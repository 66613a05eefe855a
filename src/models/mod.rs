//! Shared data models spanning the pipeline stages.

pub mod metrics;
pub mod signal;
pub mod table;

pub use metrics::{ErrorRecord, MetricsRecord, RunStatus, SuccessRecord, METRIC_NAME};
pub use signal::SignalReport;
pub use table::PriceTable;
