//! Tolerant parsing of the coordinates written in the decimal, DM or DMS notations
//! (with or without the unit signs and the hemisphere letter) into the decimal degrees.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    angle::{
        consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
        dd::DecimalDegrees,
        InvalidNumber, OutOfRange, ParseAngleError,
    },
    coord::{apply_hemisphere_sign, assert_in_range, AngleAxis, Hemisphere},
    utils::ToUnsigned,
};

/// The raw value of a coordinate: a number or a text to parse
#[derive(Debug, Clone, PartialEq)]
pub enum RawAngle<'a> {
    /// Already numeric value
    Number(f64),
    /// The text in any supported notation
    Text(Cow<'a, str>),
    /// No value at all
    Absent,
}

macro_rules! raw_angle_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for RawAngle<'_> {
                fn from(val: $t) -> Self {
                    Self::Number(f64::from(val))
                }
            }
        )+
    };
}

raw_angle_from_number!(f64, f32, i32, u32, i16, u16, i8, u8);

impl<'a> From<&'a str> for RawAngle<'a> {
    fn from(val: &'a str) -> Self {
        Self::Text(Cow::Borrowed(val))
    }
}

impl From<String> for RawAngle<'_> {
    fn from(val: String) -> Self {
        Self::Text(Cow::Owned(val))
    }
}

impl<'a> From<&'a String> for RawAngle<'a> {
    fn from(val: &'a String) -> Self {
        Self::Text(Cow::Borrowed(val.as_str()))
    }
}

impl<'a, T: Into<RawAngle<'a>>> From<Option<T>> for RawAngle<'a> {
    fn from(val: Option<T>) -> Self {
        val.map_or(Self::Absent, Into::into)
    }
}

lazy_static! {
    static ref RE_SIMPLE_DECIMAL: Regex =
        Regex::new(r"^[+-]?\d+(?:\.\d+)?$").expect("Simple decimal regex is valid");
    static ref RE_HEMISPHERE: Regex =
        Regex::new(r"\b([NSEW])\b").expect("Hemisphere regex is valid");
    static ref RE_NUMBER: Regex =
        Regex::new(r"[+-]?\d+(?:\.\d+)?").expect("Number regex is valid");
}

/// Convert the number or the numeric text into a finite number.
///
/// # Errors
/// [`InvalidNumber`] with the given `label`, when the input is not a number,
/// or the number is not finite (NaN or infinity).
pub fn coerce_finite<'a>(
    raw: impl Into<RawAngle<'a>>,
    label: &str,
) -> Result<f64, InvalidNumber> {
    let number = match raw.into() {
        RawAngle::Number(number) => number,
        RawAngle::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidNumber::new(label, &*text))?,
        RawAngle::Absent => return Err(InvalidNumber::new(label, "")),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(InvalidNumber::new(label, number.to_string()))
    }
}

/// The first standalone hemisphere letter
fn find_hemisphere(text: &str) -> Option<Hemisphere> {
    RE_HEMISPHERE
        .captures(text)
        .and_then(|capture| capture.get(1))
        .and_then(|letter| letter.as_str().parse().ok())
}

/// All the signed decimal numbers in order of appearance
fn extract_numbers(text: &str) -> Vec<f64> {
    RE_NUMBER
        .find_iter(text)
        .filter_map(|token| token.as_str().parse().ok())
        .collect()
}

fn check_sexagesimal(minutes: f64, seconds: Option<f64>) -> Result<(), OutOfRange> {
    if !(0.0..f64::from(MINUTES_IN_DEGREE)).contains(&minutes) {
        return Err(OutOfRange::ArcMinutes(minutes));
    }

    match seconds {
        Some(seconds) if !(0.0..f64::from(SECONDS_IN_MINUTE)).contains(&seconds) => {
            Err(OutOfRange::ArcSeconds(seconds))
        }
        _ => Ok(()),
    }
}

/// Join the parts into the signed degrees.
/// The hemisphere letter beats the sign of the degrees.
fn compose(degrees: f64, minutes: f64, seconds: f64, hemisphere: Option<Hemisphere>) -> f64 {
    let (magnitude, is_positive) = degrees.unsigned_abs();
    let sign = match hemisphere {
        Some(h) => h.is_positive(),
        None => is_positive,
    };

    let value = magnitude.trunc()
        + minutes / f64::from(MINUTES_IN_DEGREE)
        + seconds / SECONDS_IN_DEGREE;
    if sign {
        value
    } else {
        -value
    }
}

/// Parse a number or a text into the decimal degrees of the given axis.
///
/// The text may contain one (degrees), two (degrees and minutes)
/// or three (degrees, minutes, seconds) numbers, surrounded by any unit signs,
/// and an optional standalone hemisphere letter (`N`, `S`, `E`, `W`)
/// which takes precedence over the numeric sign. Any numbers after the third are ignored.
///
/// # Errors
/// - [`ParseAngleError::Number`] the simple numeric input is not finite;
/// - [`ParseAngleError::UnsupportedInput`] the input is [`RawAngle::Absent`];
/// - [`ParseAngleError::UnrecognizedFormat`] no numbers in the text;
/// - [`ParseAngleError::Range`] minutes or seconds are not in `[0..60)`,
///   or the degrees are out of the axis range.
pub fn parse_to_dd<'a>(
    raw: impl Into<RawAngle<'a>>,
    axis: AngleAxis,
) -> Result<DecimalDegrees, ParseAngleError> {
    let text = match raw.into() {
        RawAngle::Number(number) => return simple_decimal(RawAngle::Number(number), axis),
        RawAngle::Text(text) if RE_SIMPLE_DECIMAL.is_match(text.trim()) => {
            return simple_decimal(RawAngle::Text(text), axis);
        }
        RawAngle::Text(text) => text,
        RawAngle::Absent => return Err(ParseAngleError::UnsupportedInput),
    };

    let normalized = text.trim().to_uppercase();
    let hemisphere = find_hemisphere(&normalized);
    let numbers = extract_numbers(&normalized);
    debug!(
        input = %text,
        %axis,
        ?hemisphere,
        count = numbers.len(),
        "parsing coordinate"
    );

    let degrees = match numbers.as_slice() {
        [] => return Err(ParseAngleError::UnrecognizedFormat(text.into_owned())),
        [degrees] => apply_hemisphere_sign(*degrees, hemisphere),
        [degrees, minutes] => {
            check_sexagesimal(*minutes, None)?;
            compose(*degrees, *minutes, 0.0, hemisphere)
        }
        [degrees, minutes, seconds, ..] => {
            check_sexagesimal(*minutes, Some(*seconds))?;
            compose(*degrees, *minutes, *seconds, hemisphere)
        }
    };

    let degrees = assert_in_range(axis, degrees)?;
    Ok(DecimalDegrees::new(axis, degrees))
}

fn simple_decimal(raw: RawAngle<'_>, axis: AngleAxis) -> Result<DecimalDegrees, ParseAngleError> {
    let degrees = coerce_finite(raw, &axis.to_string())?;
    trace!(degrees, %axis, "simple decimal coordinate");
    let degrees = assert_in_range(axis, degrees)?;
    Ok(DecimalDegrees::new(axis, degrees))
}

/// Parse the latitude and the longitude.
///
/// # Errors
/// The latitude's failure is reported before the longitude is even looked at.
pub fn parse_pair_to_dd<'a, 'b>(
    lat: impl Into<RawAngle<'a>>,
    lon: impl Into<RawAngle<'b>>,
) -> Result<(DecimalDegrees, DecimalDegrees), ParseAngleError> {
    let lat = parse_to_dd(lat, AngleAxis::Latitude)?;
    let lon = parse_to_dd(lon, AngleAxis::Longitude)?;
    Ok((lat, lon))
}
