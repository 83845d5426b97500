//! Degrees, minutes and decimal seconds, e.g. `48° 51' 15.84" N`
//! <https://en.wikipedia.org/wiki/Minute_and_second_of_arc>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    convert::dms_to_dd,
    coord::{hemisphere_from_sign, AngleAxis, Hemisphere},
    format::DMS_DECIMALS,
};

use super::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN},
    dd::DecimalDegrees,
    Directed, OutOfRange,
};

/// Whole degrees, whole minutes and the decimal seconds.
///
/// The sign rules are the same as for the [`DegreesMinutes`](super::dm::DegreesMinutes).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreesMinutesSeconds {
    /// Latitude or longitude
    pub axis: AngleAxis,
    /// Whole degrees. Produced as a magnitude, but a negative value is accepted as the sign.
    pub degrees: i32,
    /// Minutes in `[0..60)`
    pub minutes: u8,
    /// Seconds in `[0..60)`
    pub seconds: f64,
    /// Explicit direction
    #[cfg_attr(feature = "serde", serde(default))]
    pub hemisphere: Option<Hemisphere>,
}

impl DegreesMinutesSeconds {
    /// Construct without the explicit hemisphere
    pub fn new(axis: AngleAxis, degrees: i32, minutes: u8, seconds: f64) -> Self {
        Self {
            axis,
            degrees,
            minutes,
            seconds,
            hemisphere: None,
        }
    }

    /// Set the explicit direction
    #[must_use]
    pub fn with_hemisphere(self, hemisphere: Hemisphere) -> Self {
        Self {
            hemisphere: Some(hemisphere),
            ..self
        }
    }

    /// Combine the parts back into decimal degrees.
    ///
    /// # Errors
    /// See [`dms_to_dd`].
    pub fn to_dd(self) -> Result<DecimalDegrees, OutOfRange> {
        dms_to_dd(self)
    }
}

impl Directed for DegreesMinutesSeconds {
    fn axis(self) -> AngleAxis {
        self.axis
    }

    fn hemisphere(self) -> Hemisphere {
        self.hemisphere
            .unwrap_or_else(|| hemisphere_from_sign(self.axis, f64::from(self.degrees)))
    }
}

impl fmt::Display for DegreesMinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DMS_DECIMALS);
        write!(
            f,
            "{}{} {}{} {:.precision$}{} {}",
            self.degrees.unsigned_abs(),
            DEGREE_SIGN,
            self.minutes,
            ARC_MINUTE_SIGN,
            self.seconds,
            ARC_SECOND_SIGN,
            Directed::hemisphere(*self),
        )
    }
}
