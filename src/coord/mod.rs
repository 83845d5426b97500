//! The coordinate axes and their directions (hemispheres)
//! along with the sign and range rules shared by every conversion.

use std::{convert::TryFrom, error::Error, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{
    consts::{HALF_TURN_DEG, QUARTER_TURN_DEG},
    OutOfRange,
};

use self::Hemisphere::{East, North, South, West};

/// Which kind of coordinate an angle represents.
/// Determines the valid range of degrees and the pair of hemisphere letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleAxis {
    /// North-south position, `-90..=90` degrees
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    Latitude,
    /// East-west position, `-180..=180` degrees
    #[cfg_attr(feature = "serde", serde(rename = "lon"))]
    Longitude,
}

impl AngleAxis {
    /// The maximum absolute value of degrees valid for the axis
    pub fn max_degrees(self) -> f64 {
        match self {
            Self::Latitude => f64::from(QUARTER_TURN_DEG),
            Self::Longitude => f64::from(HALF_TURN_DEG),
        }
    }

    /// Is the value of degrees valid for the axis (bounds included)
    pub fn contains(self, degrees: f64) -> bool {
        let max = self.max_degrees();
        (-max..=max).contains(&degrees)
    }

    /// The hemisphere for the non-negative values
    pub fn positive(self) -> Hemisphere {
        match self {
            Self::Latitude => North,
            Self::Longitude => East,
        }
    }

    /// The hemisphere for the negative values
    pub fn negative(self) -> Hemisphere {
        -self.positive()
    }
}

impl fmt::Display for AngleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}

/// The direction of a coordinate, encoding its sign
/// for the matching [axis](AngleAxis).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Positive latitude
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    /// Negative latitude
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    /// Positive longitude
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    /// Negative longitude
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

impl Hemisphere {
    /// The axis the hemisphere belongs to
    pub fn axis(self) -> AngleAxis {
        match self {
            North | South => AngleAxis::Latitude,
            East | West => AngleAxis::Longitude,
        }
    }

    /// North and East are the positive directions
    pub fn is_positive(self) -> bool {
        matches!(self, North | East)
    }

    /// The single letter code
    pub fn letter(self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }
}

impl Neg for Hemisphere {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

/// The letter is not one of `N`, `S`, `E`, `W`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHemisphereError {
    failed: String,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Hemisphere from {:?}", self.failed)
    }
}

impl Error for ParseHemisphereError {}

impl TryFrom<char> for Hemisphere {
    type Error = ParseHemisphereError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(North),
            'S' => Ok(South),
            'E' => Ok(East),
            'W' => Ok(West),
            _ => Err(ParseHemisphereError {
                failed: c.to_string(),
            }),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ParseHemisphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::try_from(letter),
            _ => Err(ParseHemisphereError {
                failed: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The axis a hemisphere letter belongs to.
pub fn axis_from_hemisphere(hemisphere: Hemisphere) -> AngleAxis {
    hemisphere.axis()
}

/// Derive the hemisphere from the sign of the value.
///
/// Zero (of either sign) belongs to the positive hemisphere.
pub fn hemisphere_from_sign(axis: AngleAxis, value: f64) -> Hemisphere {
    if value < 0.0 {
        axis.negative()
    } else {
        axis.positive()
    }
}

/// Force the sign of the value to match the hemisphere.
///
/// Without the hemisphere the value stays untouched.
pub fn apply_hemisphere_sign(value: f64, hemisphere: Option<Hemisphere>) -> f64 {
    match hemisphere {
        None => value,
        Some(h) if h.is_positive() => value.abs(),
        Some(_) => -value.abs(),
    }
}

/// Saturate the degrees at the bounds of the axis range.
pub fn clamp_to_axis_range(axis: AngleAxis, degrees: f64) -> f64 {
    let max = axis.max_degrees();
    degrees.clamp(-max, max)
}

/// Ensure the degrees are valid for the axis.
///
/// # Errors
/// [`OutOfRange::Axis`] when the value exceeds the range of the axis (or is not a number at all).
pub fn assert_in_range(axis: AngleAxis, degrees: f64) -> Result<f64, OutOfRange> {
    if axis.contains(degrees) {
        Ok(degrees)
    } else {
        Err(OutOfRange::Axis { axis, degrees })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_signs() {
        assert_eq!(hemisphere_from_sign(AngleAxis::Latitude, 12.5), North);
        assert_eq!(hemisphere_from_sign(AngleAxis::Latitude, -0.001), South);
    }

    #[test]
    fn longitude_signs() {
        assert_eq!(hemisphere_from_sign(AngleAxis::Longitude, 179.0), East);
        assert_eq!(hemisphere_from_sign(AngleAxis::Longitude, -122.4194), West);
    }

    #[test]
    fn zero_is_positive_hemisphere() {
        assert_eq!(hemisphere_from_sign(AngleAxis::Latitude, 0.0), North);
        assert_eq!(hemisphere_from_sign(AngleAxis::Latitude, -0.0), North);
        assert_eq!(hemisphere_from_sign(AngleAxis::Longitude, 0.0), East);
    }

    #[test]
    fn hemisphere_always_matches_axis() {
        for &value in &[-1e9, -180.0, -0.5, 0.0, 0.5, 90.0, 1e9, f64::NAN] {
            let lat = hemisphere_from_sign(AngleAxis::Latitude, value);
            assert!(matches!(lat, North | South));
            assert_eq!(lat.axis(), AngleAxis::Latitude);

            let lon = hemisphere_from_sign(AngleAxis::Longitude, value);
            assert!(matches!(lon, East | West));
            assert_eq!(lon.axis(), AngleAxis::Longitude);
        }
    }

    #[test]
    fn no_hemisphere_keeps_sign() {
        assert_eq!(apply_hemisphere_sign(-45.5, None), -45.5);
        assert_eq!(apply_hemisphere_sign(45.5, None), 45.5);
    }

    #[test]
    fn hemisphere_overrides_sign() {
        assert_eq!(apply_hemisphere_sign(45.5, Some(South)), -45.5);
        assert_eq!(apply_hemisphere_sign(-45.5, Some(South)), -45.5);
        assert_eq!(apply_hemisphere_sign(-45.5, Some(North)), 45.5);
        assert_eq!(apply_hemisphere_sign(-10.0, Some(East)), 10.0);
        assert_eq!(apply_hemisphere_sign(10.0, Some(West)), -10.0);
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_to_axis_range(AngleAxis::Latitude, 95.0), 90.0);
        assert_eq!(clamp_to_axis_range(AngleAxis::Latitude, -95.0), -90.0);
        assert_eq!(clamp_to_axis_range(AngleAxis::Latitude, 45.0), 45.0);
        assert_eq!(clamp_to_axis_range(AngleAxis::Longitude, 181.5), 180.0);
        assert_eq!(clamp_to_axis_range(AngleAxis::Longitude, -400.0), -180.0);
    }

    #[test]
    fn range_bounds_are_valid() {
        assert_eq!(assert_in_range(AngleAxis::Latitude, 90.0).unwrap(), 90.0);
        assert_eq!(assert_in_range(AngleAxis::Latitude, -90.0).unwrap(), -90.0);
        assert_eq!(assert_in_range(AngleAxis::Longitude, 180.0).unwrap(), 180.0);
        assert_eq!(
            assert_in_range(AngleAxis::Longitude, -180.0).unwrap(),
            -180.0
        );
    }

    #[test]
    #[should_panic(expected = "Axis { axis: Latitude, degrees: 90.5 }")]
    fn latitude_out_of_range() {
        let _d = assert_in_range(AngleAxis::Latitude, 90.5).unwrap();
    }

    #[test]
    #[should_panic(expected = "Axis { axis: Longitude, degrees: -180.01 }")]
    fn longitude_out_of_range() {
        let _d = assert_in_range(AngleAxis::Longitude, -180.01).unwrap();
    }

    #[test]
    #[should_panic(expected = "Axis")]
    fn nan_is_out_of_range() {
        let _d = assert_in_range(AngleAxis::Longitude, f64::NAN).unwrap();
    }

    #[test]
    fn axis_of_hemisphere() {
        assert_eq!(axis_from_hemisphere(North), AngleAxis::Latitude);
        assert_eq!(axis_from_hemisphere(South), AngleAxis::Latitude);
        assert_eq!(axis_from_hemisphere(East), AngleAxis::Longitude);
        assert_eq!(axis_from_hemisphere(West), AngleAxis::Longitude);
    }

    #[test]
    fn opposite_hemisphere() {
        assert_eq!(-North, South);
        assert_eq!(-West, East);
        assert_eq!(AngleAxis::Longitude.negative(), West);
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Hemisphere::try_from('n').unwrap(), North);
        assert_eq!("W".parse::<Hemisphere>().unwrap(), West);
        assert_eq!(" e ".parse::<Hemisphere>().unwrap(), East);
    }

    #[test]
    #[should_panic(expected = "ParseHemisphereError")]
    fn bad_letter() {
        let _h = Hemisphere::try_from('Z').unwrap();
    }

    #[test]
    #[should_panic(expected = "ParseHemisphereError")]
    fn too_long() {
        let _h: Hemisphere = "NE".parse().unwrap();
    }

    #[test]
    fn display() {
        assert_eq!(South.to_string(), "S");
        assert_eq!(AngleAxis::Longitude.to_string(), "longitude");
    }
}
