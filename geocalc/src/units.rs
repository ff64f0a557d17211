//! Distance units and meter conversion.
//!
//! Every unit is defined by the factor a distance in meters is multiplied by.
//!
//! | Symbol | Unit | Factor |
//! |--------|------|--------|
//! | `m` | meters | 1 |
//! | `km` | kilometers | 1/1000 |
//! | `cm` | centimeters | 100 |
//! | `mm` | millimeters | 1000 |
//! | `mi` | statute miles | 1/1609.344 |
//! | `sm` | nautical miles | 1/1852.216 |
//! | `ft` | feet | 100/30.48 |
//! | `in` | inches | 100/2.54 |
//! | `yd` | yards | 1/0.9144 |

use std::fmt;
use std::str::FromStr;

use crate::error::{GeoError, Result};
use crate::rounding::round;

/// Default number of decimal places for converted distances.
pub const DEFAULT_PRECISION: u32 = 4;

/// A supported distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Unit {
    #[default]
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    /// Statute miles
    Miles,
    NauticalMiles,
    Feet,
    Inches,
    Yards,
}

impl Unit {
    /// All supported units, in table order.
    pub const ALL: [Unit; 9] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Centimeters,
        Unit::Millimeters,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Feet,
        Unit::Inches,
        Unit::Yards,
    ];

    /// Returns the factor a distance in meters is multiplied by.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Kilometers => 1.0 / 1000.0,
            Unit::Centimeters => 100.0,
            Unit::Millimeters => 1000.0,
            Unit::Miles => 1.0 / 1609.344,
            Unit::NauticalMiles => 1.0 / 1852.216,
            Unit::Feet => 100.0 / 30.48,
            Unit::Inches => 100.0 / 2.54,
            Unit::Yards => 1.0 / 0.9144,
        }
    }

    /// Returns the short symbol (e.g. `"km"`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
            Unit::Miles => "mi",
            Unit::NauticalMiles => "sm",
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Yards => "yd",
        }
    }

    /// Returns the human-readable name (e.g. `"kilometers"`).
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Centimeters => "centimeters",
            Unit::Millimeters => "millimeters",
            Unit::Miles => "statute miles",
            Unit::NauticalMiles => "nautical miles",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| GeoError::UnknownUnit {
                unit: s.to_string(),
            })
    }
}

impl TryFrom<String> for Unit {
    type Error = GeoError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

/// Convert a distance in meters to `unit`, rounded to `precision` decimal places.
///
/// # Examples
///
/// ```
/// use geocalc::units::{convert, Unit};
///
/// assert_eq!(convert(1000.0, Unit::Kilometers, 4), 1.0);
/// assert_eq!(convert(1609.344, Unit::Miles, 4), 1.0);
/// assert_eq!(convert(1.0, Unit::Feet, 2), 3.28);
/// ```
pub fn convert(meters: f64, unit: Unit, precision: u32) -> f64 {
    round(meters * unit.factor(), precision as i32)
}

/// Convert a distance in meters using a unit symbol.
///
/// Unknown symbols leave the value in meters (still rounded to `precision`),
/// matching the permissive behavior older callers rely on. Use
/// [`Unit::from_str`] and [`convert`] to reject unknown symbols instead.
///
/// # Examples
///
/// ```
/// use geocalc::units::convert_symbol;
///
/// assert_eq!(convert_symbol(2500.0, "km", 4), 2.5);
/// assert_eq!(convert_symbol(2500.0, "furlong", 4), 2500.0);
/// ```
pub fn convert_symbol(meters: f64, symbol: &str, precision: u32) -> f64 {
    let unit = symbol.parse().unwrap_or(Unit::Meters);
    convert(meters, unit, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(convert(1000.0, Unit::Meters, 4), 1000.0);
        assert_eq!(convert(1000.0, Unit::Kilometers, 4), 1.0);
        assert_eq!(convert(1.0, Unit::Centimeters, 4), 100.0);
        assert_eq!(convert(1.0, Unit::Millimeters, 4), 1000.0);
        assert_eq!(convert(1609.344, Unit::Miles, 4), 1.0);
        assert_eq!(convert(1852.216, Unit::NauticalMiles, 4), 1.0);
        assert_eq!(convert(0.3048, Unit::Feet, 4), 1.0);
        assert_eq!(convert(0.0254, Unit::Inches, 4), 1.0);
        assert_eq!(convert(0.9144, Unit::Yards, 4), 1.0);
    }

    #[test]
    fn test_precision() {
        // 279352 m = 173.5808... mi
        assert_eq!(convert(279_352.0, Unit::Miles, 0), 174.0);
        assert_eq!(convert(279_352.0, Unit::Miles, 1), 173.6);
        assert_eq!(convert(279_352.0, Unit::Kilometers, 2), 279.35);
    }

    #[test]
    fn test_parse_symbols() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "KM".parse::<Unit>().unwrap_err();
        assert_eq!(
            err,
            GeoError::UnknownUnit {
                unit: "KM".to_string()
            }
        );
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_default_is_meters() {
        assert_eq!(Unit::default(), Unit::Meters);
    }

    #[test]
    fn test_convert_symbol_passthrough() {
        assert_eq!(convert_symbol(123.456789, "parsec", 4), 123.4568);
        assert_eq!(convert_symbol(123.456789, "cm", 2), 12345.68);
    }
}
