//! Currency-precision arithmetic helpers.

/// Round to two decimal places (half away from zero).
///
/// Negative zero is normalised to `0.0` so that a break-even total never
/// renders as `-0.00`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `numerator / denominator * 100`, rounded to two decimals.
///
/// Returns `None` when the denominator is zero or the result is not finite.
pub fn percentage(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator * 100.0;
    ratio.is_finite().then(|| round2(ratio))
}
