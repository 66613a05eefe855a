use serde::{Deserialize, Serialize};

/// Validated input table.
///
/// Only the required column carries meaning for the pipeline, so its values
/// are kept parsed while the rest of the header is retained for reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub columns: Vec<String>,
    pub column: String,
    pub values: Vec<f64>,
}

impl PriceTable {
    pub fn new(columns: Vec<String>, column: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            columns,
            column: column.into(),
            values,
        }
    }

    /// Single-column table, mostly handy in tests.
    pub fn from_values(column: impl Into<String>, values: Vec<f64>) -> Self {
        let column = column.into();
        Self {
            columns: vec![column.clone()],
            column,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
