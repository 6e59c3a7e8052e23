//! Descriptive statistics over integer batches.

/// Population standard deviation (divisor `n`), rounded to two decimals.
///
/// Rounding is half away from zero. Returns `None` for an empty slice,
/// where the mean is undefined.
pub fn standard_deviation(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Some(round_cents(variance.sqrt()))
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
