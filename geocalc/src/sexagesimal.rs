//! Sexagesimal (degrees/minutes/seconds) coordinate notation.
//!
//! # Format
//!
//! ```text
//! {deg}° {min}' [{sec}[.{frac}]"] [N|E|S|W]
//! ```
//!
//! - Degrees and minutes: 1-3 digits, mandatory
//! - Seconds: 1-3 digits with an optional 1-2 digit fraction, optional
//! - Hemisphere: optional single letter; `O` is accepted as East
//! - Whitespace between the components is optional
//!
//! South and West hemispheres produce negative decimal degrees. Component
//! ranges are not checked: `0° 75'` parses to `1.25`.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{anychar, char, multispace0},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize},
    sequence::{pair, terminated, tuple},
    IResult,
};

use crate::error::{GeoError, Result};
use crate::rounding::round;

/// Number of fractional digits kept when converting to decimal degrees.
pub const DECIMAL_PLACES: i32 = 8;

/// Hemisphere letter suffix of a sexagesimal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    East,
    South,
    West,
}

impl Hemisphere {
    /// `-1.0` for South and West, `1.0` otherwise.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }

    /// Parse a hemisphere letter (`N`, `E`/`O`, `S`, `W`).
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::North),
            'E' | 'O' => Some(Hemisphere::East),
            'S' => Some(Hemisphere::South),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::East => 'E',
            Hemisphere::South => 'S',
            Hemisphere::West => 'W',
        }
    }
}

/// A parsed sexagesimal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub degrees: u16,
    pub minutes: u16,
    /// Seconds, 0.0 when absent from the text.
    pub seconds: f64,
    pub hemisphere: Option<Hemisphere>,
}

impl Sexagesimal {
    /// Convert to signed decimal degrees, rounded to [`DECIMAL_PLACES`].
    pub fn to_decimal(&self) -> f64 {
        let unsigned = f64::from(self.degrees)
            + f64::from(self.minutes) / 60.0
            + self.seconds / 3600.0;
        let decimal = round(unsigned, DECIMAL_PLACES);

        match self.hemisphere {
            Some(h) => decimal * h.sign(),
            None => decimal,
        }
    }
}

impl FromStr for Sexagesimal {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match all_consuming(sexagesimal)(s) {
            Ok((_, value)) => Ok(value),
            Err(_) => Err(GeoError::InvalidSexagesimalFormat {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {:.2}\"", self.degrees, self.minutes, self.seconds)?;
        if let Some(h) = self.hemisphere {
            write!(f, " {}", h.letter())?;
        }
        Ok(())
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 1-3 digit degree or minute field.
fn whole_number(i: &str) -> IResult<&str, u16> {
    map_res(take_while_m_n(1, 3, is_digit), |s: &str| s.parse::<u16>())(i)
}

/// `{sec}[.{frac}]"` followed by optional whitespace.
fn seconds(i: &str) -> IResult<&str, f64> {
    let number = recognize(pair(
        take_while_m_n(1, 3, is_digit),
        opt(pair(char('.'), take_while_m_n(1, 2, is_digit))),
    ));
    terminated(
        map_res(number, |s: &str| s.parse::<f64>()),
        pair(char('"'), multispace0),
    )(i)
}

fn hemisphere(i: &str) -> IResult<&str, Hemisphere> {
    map_opt(anychar, Hemisphere::from_letter)(i)
}

fn sexagesimal(i: &str) -> IResult<&str, Sexagesimal> {
    map(
        tuple((
            terminated(whole_number, pair(char('°'), multispace0)),
            terminated(whole_number, pair(char('\''), multispace0)),
            opt(seconds),
            opt(hemisphere),
        )),
        |(degrees, minutes, seconds, hemisphere)| Sexagesimal {
            degrees,
            minutes,
            seconds: seconds.unwrap_or(0.0),
            hemisphere,
        },
    )(i)
}

/// Check whether `text` is a complete sexagesimal coordinate.
///
/// # Examples
///
/// ```
/// use geocalc::sexagesimal::is_sexagesimal;
///
/// assert!(is_sexagesimal("51° 30' 11.86\" N"));
/// assert!(is_sexagesimal("51° 30'"));
/// assert!(!is_sexagesimal("51.50329"));
/// ```
pub fn is_sexagesimal(text: &str) -> bool {
    all_consuming(sexagesimal)(text).is_ok()
}

/// Convert sexagesimal text to signed decimal degrees.
///
/// Missing seconds count as zero. The result keeps 8 fractional digits and
/// is negative for the `S` and `W` hemispheres.
///
/// # Errors
///
/// Returns [`GeoError::InvalidSexagesimalFormat`] if `text` doesn't match.
///
/// # Examples
///
/// ```
/// use geocalc::sexagesimal::sexagesimal_to_decimal;
///
/// assert_eq!(sexagesimal_to_decimal("51° 30' 0\" N").unwrap(), 51.5);
/// assert_eq!(sexagesimal_to_decimal("0° 7' 10.2\" W").unwrap(), -0.1195);
/// assert!(sexagesimal_to_decimal("51.5").is_err());
/// ```
pub fn sexagesimal_to_decimal(text: &str) -> Result<f64> {
    text.parse::<Sexagesimal>().map(|s| s.to_decimal())
}

/// Convert decimal degrees to sexagesimal text (`{deg}° {min}' {sec}"`).
///
/// Seconds are formatted with 2 decimal places. No hemisphere letter is
/// written: the sign stays on the degree field, so negative input does not
/// survive a round trip through [`sexagesimal_to_decimal`].
///
/// # Examples
///
/// ```
/// use geocalc::sexagesimal::decimal_to_sexagesimal;
///
/// assert_eq!(decimal_to_sexagesimal(51.5), "51° 30' 0.00\"");
/// assert_eq!(decimal_to_sexagesimal(-0.1195), "-0° 7' 10.20\"");
/// assert_eq!(decimal_to_sexagesimal(12.0), "12° 0' 0.00\"");
/// ```
pub fn decimal_to_sexagesimal(dec: f64) -> String {
    let degrees = dec.trunc();
    let minutes = fraction(dec) * 60.0;
    let seconds = fraction(minutes) * 60.0;

    format!("{}° {}' {:.2}\"", degrees, minutes.trunc(), seconds)
}

/// Fractional digits of `value` as printed, read back as `0.{digits}`.
///
/// Working on the shortest decimal representation avoids the binary noise
/// that `value - value.trunc()` picks up (51.503293 would give
/// 0.50329300000000217).
fn fraction(value: f64) -> f64 {
    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((_, digits)) => format!("0.{}", digits).parse().unwrap_or(0.0),
        None => 0.0,
    }
}
