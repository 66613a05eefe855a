use serde::{Deserialize, Serialize};

/// Output of the signal engine, aligned 1:1 with the input rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub rolling: Vec<Option<f64>>,
    pub signals: Vec<Option<u8>>,
    pub signal_rate: f64,
    pub eligible_rows: usize,
}

impl SignalReport {
    /// Number of rows carrying signal 1.
    pub fn positive_rows(&self) -> usize {
        self.signals.iter().filter(|s| **s == Some(1)).count()
    }
}
