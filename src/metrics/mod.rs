//! Metrics record construction and output.

pub mod reporter;

pub use reporter::{round_value, MetricsReporter, PartialContext, VALUE_PRECISION};
