//! Unit tests for signal engine

use rollsignal::models::PriceTable;
use rollsignal::signals::SignalEngine;
use rollsignal::JobError;

fn table(values: &[f64]) -> PriceTable {
    PriceTable::from_values("close", values.to_vec())
}

#[test]
fn test_compute_rising_series() {
    let report = SignalEngine::compute(&table(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), 3).unwrap();
    assert_eq!(
        report.rolling,
        vec![None, None, Some(2.0), Some(3.0), Some(4.0), Some(5.0)]
    );
    assert_eq!(
        report.signals,
        vec![None, None, Some(1), Some(1), Some(1), Some(1)]
    );
    assert_eq!(report.signal_rate, 1.0);
    assert_eq!(report.eligible_rows, 4);
    assert_eq!(report.positive_rows(), 4);
}

#[test]
fn test_compute_tie_resolves_to_zero() {
    let report = SignalEngine::compute(&table(&[5.0, 5.0, 5.0, 5.0]), 3).unwrap();
    assert_eq!(report.signals, vec![None, None, Some(0), Some(0)]);
    assert_eq!(report.signal_rate, 0.0);

    // 2 == (1 + 3 + 2) / 3
    let report = SignalEngine::compute(&table(&[1.0, 3.0, 2.0]), 3).unwrap();
    assert_eq!(report.signals[2], Some(0));
}

#[test]
fn test_compute_falling_series() {
    let report = SignalEngine::compute(&table(&[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]), 2).unwrap();
    assert_eq!(report.signal_rate, 0.0);
}

#[test]
fn test_compute_defined_count_matches_window() {
    let values: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin() * 10.0 + 50.0).collect();
    for window in 1..=values.len() {
        let report = SignalEngine::compute(&table(&values), window).unwrap();
        let defined = report.signals.iter().filter(|s| s.is_some()).count();
        assert_eq!(defined, values.len() - window + 1);
        assert_eq!(report.eligible_rows, defined);
        assert!((0.0..=1.0).contains(&report.signal_rate));
    }
}

#[test]
fn test_compute_window_equals_length() {
    let report = SignalEngine::compute(&table(&[1.0, 2.0, 9.0]), 3).unwrap();
    assert_eq!(report.eligible_rows, 1);
    assert_eq!(report.signal_rate, 1.0);
}

#[test]
fn test_compute_window_exceeds_length() {
    let err = SignalEngine::compute(&table(&[1.0, 2.0]), 3).unwrap_err();
    assert!(matches!(err, JobError::Config(_)));
}

#[test]
fn test_compute_zero_window() {
    let err = SignalEngine::compute(&table(&[1.0, 2.0]), 0).unwrap_err();
    assert!(matches!(err, JobError::Config(_)));
}

#[test]
fn test_compute_empty_table() {
    let err = SignalEngine::compute(&table(&[]), 1).unwrap_err();
    assert!(matches!(err, JobError::Config(_)));
}

#[test]
fn test_compute_near_f64_max_signal() {
    let report = SignalEngine::compute(&table(&[1.7e308, 1.7e308, 1.79e308]), 3).unwrap();
    assert_eq!(report.signals, vec![None, None, Some(1)]);
    assert_eq!(report.signal_rate, 1.0);
}
