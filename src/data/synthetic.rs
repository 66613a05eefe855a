//! Seeded synthetic price series.
//!
//! Output depends only on the RNG state handed in, so a run seeded from the
//! resolved configuration always produces the same file.

use crate::error::{JobError, JobResult};
use crate::models::table::PriceTable;
use chrono::{DateTime, Duration, TimeZone, Utc};
use csv::WriterBuilder;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

const MIN_PRICE: f64 = 0.01;
const EPOCH_SECONDS: i64 = 1_700_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticBar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Multiplicative random walk with uniform returns in `[-volatility, volatility]`.
pub fn generate_random_walk<R: Rng>(
    rng: &mut R,
    rows: usize,
    start_price: f64,
    volatility: f64,
) -> JobResult<Vec<SyntheticBar>> {
    if rows == 0 {
        return Err(JobError::Config("rows must be >= 1".to_string()));
    }
    if !(start_price.is_finite() && start_price > 0.0) {
        return Err(JobError::Config(format!(
            "start_price must be positive, got {}",
            start_price
        )));
    }
    if !(volatility.is_finite() && (0.0..1.0).contains(&volatility)) {
        return Err(JobError::Config(format!(
            "volatility must be in [0, 1), got {}",
            volatility
        )));
    }

    let epoch = Utc
        .timestamp_opt(EPOCH_SECONDS, 0)
        .single()
        .ok_or_else(|| JobError::Config("invalid synthetic epoch".to_string()))?;

    let mut price = start_price;
    let mut bars = Vec::with_capacity(rows);
    for i in 0..rows {
        if i > 0 {
            let step = if volatility > 0.0 {
                rng.gen_range(-volatility..=volatility)
            } else {
                0.0
            };
            price = (price * (1.0 + step)).max(MIN_PRICE);
        }
        bars.push(SyntheticBar {
            timestamp: epoch + Duration::minutes(i as i64),
            close: price,
        });
    }
    Ok(bars)
}

pub fn bars_to_table(bars: &[SyntheticBar]) -> PriceTable {
    PriceTable::new(
        vec!["timestamp".to_string(), "close".to_string()],
        "close",
        bars.iter().map(|b| b.close).collect(),
    )
}

/// Write bars as a delimited file with a `timestamp,close` header.
pub fn write_bars(bars: &[SyntheticBar], path: &Path, delimiter: u8) -> JobResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| JobError::io("create directory", parent, e))?;
    }
    let file = File::create(path).map_err(|e| JobError::io("create", path, e))?;
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(file);

    // serialize() only emits the header alongside the first record
    if bars.is_empty() {
        writer
            .write_record(["timestamp", "close"])
            .map_err(|e| JobError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }
    for bar in bars {
        writer
            .serialize(bar)
            .map_err(|e| JobError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }
    writer.flush().map_err(|e| JobError::io("flush", path, e))?;
    Ok(())
}
