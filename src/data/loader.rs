//! CSV loading and validation for the input table.

use crate::error::{open_error, JobError, JobResult};
use crate::models::table::PriceTable;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Load `path` and validate that `required_column` is present and numeric.
pub fn load_table(path: &Path, required_column: &str, delimiter: u8) -> JobResult<PriceTable> {
    if !path.is_file() {
        return Err(JobError::NotFound(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|e| open_error("Input", path, e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = validate_headers(&headers)?;

    let index = columns
        .iter()
        .position(|c| c == required_column)
        .ok_or_else(|| {
            JobError::Schema(format!(
                "Required '{}' column missing (found: {})",
                required_column,
                columns.join(", ")
            ))
        })?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let raw = record.get(index).unwrap_or("");
        values.push(parse_value(raw, row + 1, required_column)?);
    }

    if values.is_empty() {
        return Err(JobError::Schema(format!(
            "Column '{}' has no data rows",
            required_column
        )));
    }

    debug!(
        path = %path.display(),
        rows = values.len(),
        columns = columns.len(),
        "Loaded {} rows from {}",
        values.len(),
        path.display()
    );

    Ok(PriceTable::new(columns, required_column, values))
}

fn validate_headers(headers: &StringRecord) -> JobResult<Vec<String>> {
    if headers.is_empty() {
        return Err(JobError::Format("Input file is empty".to_string()));
    }
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    if columns.iter().any(|c| c.is_empty()) {
        return Err(JobError::Format(format!(
            "Header contains a blank column name: {:?}",
            columns
        )));
    }
    Ok(columns)
}

fn parse_value(raw: &str, row: usize, column: &str) -> JobResult<f64> {
    if raw.is_empty() {
        return Err(JobError::Schema(format!(
            "Column '{}' has an empty value at row {}",
            column, row
        )));
    }
    let value: f64 = raw.parse().map_err(|_| {
        JobError::Schema(format!(
            "Column '{}' has non-numeric value {:?} at row {}",
            column, raw, row
        ))
    })?;
    if !value.is_finite() {
        return Err(JobError::Schema(format!(
            "Column '{}' has non-finite value {:?} at row {}",
            column, raw, row
        )));
    }
    Ok(value)
}

fn csv_error(err: csv::Error) -> JobError {
    if err.is_io_error() {
        JobError::Io(format!("Failed to read input: {}", err))
    } else {
        JobError::Format(format!("Malformed input: {}", err))
    }
}
