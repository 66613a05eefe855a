//! SMA (Simple Moving Average) over a trailing window

/// Trailing mean at every index; `None` until a full window is available.
///
/// Each window is summed from scratch rather than updated incrementally, so
/// a window of identical values yields exactly that value.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || window > values.len() {
        return vec![None; values.len()];
    }

    let mut out = vec![None; window - 1];
    out.extend(
        values
            .windows(window)
            .map(|w| Some(window_mean(w))),
    );
    out
}

/// Plain sum first so equal-valued windows stay exact; scale each term when
/// the sum overflows near `f64::MAX`.
fn window_mean(w: &[f64]) -> f64 {
    let n = w.len() as f64;
    let mean = w.iter().sum::<f64>() / n;
    if mean.is_finite() {
        mean
    } else {
        w.iter().map(|v| v / n).sum()
    }
}

