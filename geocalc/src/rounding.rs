//! Decimal rounding and distance quantization.

/// Round `value` to `places` decimal places.
///
/// Scales by `10^places`, rounds half away from zero and scales back down.
/// Negative `places` rounds to tens, hundreds, etc.
///
/// # Examples
///
/// ```
/// use geocalc::rounding::round;
///
/// assert_eq!(round(1.23456, 2), 1.23);
/// assert_eq!(round(2.5, 0), 3.0);
/// assert_eq!(round(1234.0, -2), 1200.0);
/// ```
pub fn round(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Quantize a distance in meters to the nearest multiple of `accuracy`.
///
/// An accuracy of 0 is treated as 1 (no quantization).
///
/// # Examples
///
/// ```
/// use geocalc::rounding::quantize;
///
/// assert_eq!(quantize(279_352, 100), 279_400);
/// assert_eq!(quantize(279_352, 1), 279_352);
/// assert_eq!(quantize(42, 0), 42);
/// ```
pub fn quantize(meters: u64, accuracy: u32) -> u64 {
    let accuracy = u64::from(accuracy.max(1));
    ((meters as f64 / accuracy as f64).round() as u64) * accuracy
}
