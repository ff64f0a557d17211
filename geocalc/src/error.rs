//! Error types for the geocalc library.

use thiserror::Error;

use crate::coordinate::Axis;

/// Errors that can occur when parsing coordinates or converting distances.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Input is neither a plain decimal number nor sexagesimal text.
    #[error("Unrecognized coordinate format: {input:?}")]
    UnrecognizedCoordinateFormat { input: String },

    /// Sexagesimal parsing was invoked on text that doesn't match the pattern.
    #[error("Invalid sexagesimal format: {input:?} (expected e.g. 51° 30' 11.86\" N)")]
    InvalidSexagesimalFormat { input: String },

    /// No distance was given and none has been computed yet.
    #[error("No distance given and no distance computed yet")]
    NoDistanceAvailable,

    /// The unit symbol is not one of m, km, cm, mm, mi, sm, ft, in, yd.
    #[error("Unknown unit: {unit:?} (valid: m, km, cm, mm, mi, sm, ft, in, yd)")]
    UnknownUnit { unit: String },

    /// A latitude or longitude outside its valid range.
    #[error("{axis} out of range: {value} (valid: {})", .axis.range_display())]
    OutOfRange { axis: Axis, value: f64 },

    /// A point string that isn't of the form `"lat,lng"`.
    #[error("Invalid point: {input:?} (expected \"lat,lng\")")]
    InvalidPoint { input: String },

    /// An environment variable holds a value that can't be used.
    #[error("Invalid configuration: {var}={value:?}")]
    InvalidConfig { var: &'static str, value: String },
}

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
