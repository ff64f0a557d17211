//! Great-circle distance on a spherical Earth.
//!
//! Uses the spherical law of cosines with the WGS-84 equatorial radius.

use crate::coordinate::Point;
use crate::rounding::quantize;

/// Earth radius in meters (WGS-84 equatorial radius, not the mean radius).
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Default quantization granularity, in meters.
pub const DEFAULT_ACCURACY: u32 = 1;

/// Central angle between two points, in radians.
///
/// The cosine is clamped to `[-1, 1]` so identical points yield exactly 0
/// instead of NaN from floating-point drift.
pub fn central_angle(from: &Point, to: &Point) -> f64 {
    let lat1 = from.lat().to_radians();
    let lng1 = from.lng().to_radians();
    let lat2 = to.lat().to_radians();
    let lng2 = to.lng().to_radians();

    let cos_angle = lat2.sin() * lat1.sin() + lat2.cos() * lat1.cos() * (lng1 - lng2).cos();

    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Distance between two points in whole meters, quantized to `accuracy`.
///
/// The raw distance is rounded to the nearest meter first, then to the
/// nearest multiple of `accuracy` (0 is treated as 1).
///
/// # Examples
///
/// ```
/// use geocalc::{distance::distance, Point};
///
/// let warsaw = Point::new(52.2296756, 21.0122287).unwrap();
/// let poznan = Point::new(52.406374, 16.9251681).unwrap();
///
/// let meters = distance(&warsaw, &poznan, 1);
/// assert!((278_000..280_000).contains(&meters));
/// assert_eq!(distance(&warsaw, &poznan, 1000) % 1000, 0);
/// assert_eq!(distance(&warsaw, &warsaw, 1), 0);
/// ```
pub fn distance(from: &Point, to: &Point, accuracy: u32) -> u64 {
    let meters = (central_angle(from, to) * EARTH_RADIUS_METERS).round() as u64;
    quantize(meters, accuracy)
}
