//! # geocalc - Geographic Distance and Coordinate Notation
//!
//! Small, dependency-light library for everyday geographic calculations:
//!
//! - **Distance**: great-circle distance between two points in meters,
//!   optionally quantized (e.g. to the nearest 10 m)
//! - **Units**: convert meters to km, cm, mm, miles, nautical miles, feet,
//!   inches or yards
//! - **Notation**: parse and format sexagesimal coordinates
//!   (`51° 30' 11.86" N`) and accept them anywhere a decimal is expected
//!
//! ## Quick Start
//!
//! ```
//! use geocalc::{GeoContext, Point, Unit};
//!
//! let ctx = GeoContext::default();
//!
//! // "lat,lng" strings, decimal or sexagesimal
//! let meters = ctx.distance_from_strings(
//!     "52.2296756,21.0122287",
//!     "52° 24' 22.95\" N,16° 55' 30.61\" E",
//!     None,
//! )?;
//!
//! // Reuses the distance just computed
//! let miles = ctx.convert_unit(Unit::Miles, None, Some(2))?;
//! assert!(miles > 170.0 && miles < 175.0);
//!
//! // Or keep everything explicit with the free functions
//! let warsaw = Point::new(52.2296756, 21.0122287)?;
//! let poznan: Point = "52.406374,16.9251681".parse()?;
//! assert!(geocalc::distance::distance(&warsaw, &poznan, 1).abs_diff(meters) < 10);
//! # Ok::<(), geocalc::GeoError>(())
//! ```
//!
//! ## Earth Model
//!
//! Distances use the spherical law of cosines with the WGS-84 equatorial
//! radius (6 378 137 m). There is no ellipsoidal correction.

pub mod context;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod rounding;
pub mod sexagesimal;
pub mod units;

// Re-export main types at crate root for convenience
pub use context::{CacheStats, GeoContext, GeoContextBuilder};
pub use coordinate::{use_decimal, Axis, Point, ToDecimalDegrees};
pub use distance::EARTH_RADIUS_METERS;
pub use error::{GeoError, Result};
pub use rounding::round;
pub use sexagesimal::{
    decimal_to_sexagesimal, is_sexagesimal, sexagesimal_to_decimal, Hemisphere, Sexagesimal,
};
pub use units::Unit;
