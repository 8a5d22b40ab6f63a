//! Small numeric helpers.

/// Evenly spaced samples `start, start + inc, ...` up to `end` inclusive.
///
/// The sample count is `floor((end - start) / inc + 1)`; an empty vector is
/// returned when `inc` is zero or points away from `end`.
pub fn frange(start: f64, inc: f64, end: f64) -> Vec<f64> {
    let count = (end - start) / inc + 1.0;
    if !count.is_finite() || count < 1.0 {
        return Vec::new();
    }
    (0..count as usize).map(|i| start + inc * i as f64).collect()
}

/// Machine epsilon derived from `7/3 - 4/3 - 1`.
pub fn machine_epsilon() -> f64 {
    7.0 / 3.0 - 4.0 / 3.0 - 1.0
}
