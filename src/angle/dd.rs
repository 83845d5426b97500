//! Decimal degrees: the canonical signed form of a coordinate.
//! <https://en.wikipedia.org/wiki/Decimal_degrees>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    convert::{dd_to_dm, dd_to_dms, ConversionOptions},
    coord::{hemisphere_from_sign, AngleAxis, Hemisphere},
    format::DD_DECIMALS,
    parse::{parse_to_dd, RawAngle},
};

use super::{
    consts::DEGREE_SIGN, dm::DegreesMinutes, dms::DegreesMinutesSeconds, Directed,
    ParseAngleError,
};

/// Signed angle in degrees with a decimal fraction.
///
/// Negative values are southern latitudes or western longitudes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalDegrees {
    /// Latitude or longitude
    pub axis: AngleAxis,
    /// The signed value
    pub degrees: f64,
}

impl DecimalDegrees {
    /// Construct the angle as is, without any range checks
    pub fn new(axis: AngleAxis, degrees: f64) -> Self {
        Self { axis, degrees }
    }

    /// Parse a latitude from a number or a loosely formatted text.
    ///
    /// # Errors
    /// See [`parse_to_dd`].
    pub fn latitude<'a>(raw: impl Into<RawAngle<'a>>) -> Result<Self, ParseAngleError> {
        parse_to_dd(raw, AngleAxis::Latitude)
    }

    /// Parse a longitude from a number or a loosely formatted text.
    ///
    /// # Errors
    /// See [`parse_to_dd`].
    pub fn longitude<'a>(raw: impl Into<RawAngle<'a>>) -> Result<Self, ParseAngleError> {
        parse_to_dd(raw, AngleAxis::Longitude)
    }

    /// Split into degrees and decimal minutes
    pub fn to_dm(self, options: ConversionOptions) -> DegreesMinutes {
        dd_to_dm(self, options)
    }

    /// Split into degrees, whole minutes and decimal seconds
    pub fn to_dms(self, options: ConversionOptions) -> DegreesMinutesSeconds {
        dd_to_dms(self, options)
    }
}

impl Directed for DecimalDegrees {
    fn axis(self) -> AngleAxis {
        self.axis
    }

    fn hemisphere(self) -> Hemisphere {
        hemisphere_from_sign(self.axis, self.degrees)
    }
}

impl From<DecimalDegrees> for f64 {
    fn from(dd: DecimalDegrees) -> Self {
        dd.degrees
    }
}

impl fmt::Display for DecimalDegrees {
    /// The formatter's precision overrides the default 5 decimal digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DD_DECIMALS);
        write!(
            f,
            "{:.precision$}{} {}",
            self.degrees.abs(),
            DEGREE_SIGN,
            self.hemisphere(),
        )
    }
}
