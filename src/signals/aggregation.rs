//! Signal derivation and aggregation

/// Compare each value to its rolling mean.
///
/// Strictly greater gives 1; equal or below gives 0. Positions without a
/// rolling mean stay `None`.
pub fn derive_signals(values: &[f64], rolling: &[Option<f64>]) -> Vec<Option<u8>> {
    values
        .iter()
        .zip(rolling)
        .map(|(&value, mean)| mean.map(|m| u8::from(value > m)))
        .collect()
}

/// Mean of the defined signal entries, `None` when none are defined.
pub fn signal_rate(signals: &[Option<u8>]) -> Option<f64> {
    let (sum, count) = signals
        .iter()
        .flatten()
        .fold((0u64, 0usize), |(sum, count), &s| (sum + u64::from(s), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
