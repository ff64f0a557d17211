//! Coordinate normalization and validated points.
//!
//! Coordinates arrive either as decimal degrees (as numbers or text) or as
//! sexagesimal text. [`use_decimal`] turns any accepted text into decimal
//! degrees; [`Point`] pairs a validated latitude and longitude.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeoError, Result};
use crate::sexagesimal::{is_sexagesimal, sexagesimal_to_decimal};

/// Which half of a point a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value allowed on this axis.
    pub fn max_abs(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    pub(crate) fn range_display(&self) -> &'static str {
        match self {
            Axis::Latitude => "±90°",
            Axis::Longitude => "±180°",
        }
    }

    /// Check that `value` lies within this axis' range.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::OutOfRange`] for values outside the range or NaN.
    pub fn validate(&self, value: f64) -> Result<f64> {
        let max = self.max_abs();
        if (-max..=max).contains(&value) {
            Ok(value)
        } else {
            Err(GeoError::OutOfRange { axis: *self, value })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("Latitude"),
            Axis::Longitude => f.write_str("Longitude"),
        }
    }
}

/// Convert decimal or sexagesimal text to decimal degrees.
///
/// All whitespace is stripped first. Text that parses as a finite decimal
/// number is returned as-is; otherwise sexagesimal text is converted with
/// [`sexagesimal_to_decimal`].
///
/// # Errors
///
/// Returns [`GeoError::UnrecognizedCoordinateFormat`] if the text is neither.
///
/// # Examples
///
/// ```
/// use geocalc::coordinate::use_decimal;
///
/// assert_eq!(use_decimal("51.503293").unwrap(), 51.503293);
/// assert_eq!(use_decimal(" -0.1195 ").unwrap(), -0.1195);
/// assert_eq!(use_decimal("51° 30' 0\" S").unwrap(), -51.5);
/// assert!(use_decimal("fifty-one").is_err());
/// ```
pub fn use_decimal(raw: &str) -> Result<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(value) = parse_plain_decimal(&compact) {
        return Ok(value);
    }

    if is_sexagesimal(&compact) {
        return sexagesimal_to_decimal(&compact);
    }

    Err(GeoError::UnrecognizedCoordinateFormat {
        input: raw.to_string(),
    })
}

/// Parse a finite decimal number, rejecting `inf`/`NaN` spellings.
pub(crate) fn parse_plain_decimal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Anything that can be read as decimal degrees.
///
/// Numbers pass through; text goes through [`use_decimal`], so decimal and
/// sexagesimal components can be mixed freely.
pub trait ToDecimalDegrees {
    fn to_decimal_degrees(&self) -> Result<f64>;
}

impl ToDecimalDegrees for f64 {
    fn to_decimal_degrees(&self) -> Result<f64> {
        Ok(*self)
    }
}

impl ToDecimalDegrees for f32 {
    fn to_decimal_degrees(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl ToDecimalDegrees for str {
    fn to_decimal_degrees(&self) -> Result<f64> {
        use_decimal(self)
    }
}

impl ToDecimalDegrees for String {
    fn to_decimal_degrees(&self) -> Result<f64> {
        use_decimal(self)
    }
}

impl<T: ToDecimalDegrees + ?Sized> ToDecimalDegrees for &T {
    fn to_decimal_degrees(&self) -> Result<f64> {
        (**self).to_decimal_degrees()
    }
}

/// A validated (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a point from decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::OutOfRange`] if latitude is outside ±90° or
    /// longitude outside ±180°.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        Ok(Self {
            lat: Axis::Latitude.validate(lat)?,
            lng: Axis::Longitude.validate(lng)?,
        })
    }

    /// Create a point from components in any accepted format.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocalc::Point;
    ///
    /// let p = Point::from_components("51° 30' 0\" N", -0.1195).unwrap();
    /// assert_eq!(p.lat(), 51.5);
    /// assert_eq!(p.lng(), -0.1195);
    /// ```
    pub fn from_components<A, B>(lat: A, lng: B) -> Result<Self>
    where
        A: ToDecimalDegrees,
        B: ToDecimalDegrees,
    {
        Self::new(lat.to_decimal_degrees()?, lng.to_decimal_degrees()?)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl FromStr for Point {
    type Err = GeoError;

    /// Parse `"lat,lng"`, each half decimal or sexagesimal.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => Self::new(use_decimal(lat)?, use_decimal(lng)?),
            _ => Err(GeoError::InvalidPoint {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
