//! Degrees and decimal minutes, e.g. `48° 51.26' N`

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    convert::dm_to_dd,
    coord::{hemisphere_from_sign, AngleAxis, Hemisphere},
    format::DM_DECIMALS,
};

use super::{
    consts::{ARC_MINUTE_SIGN, DEGREE_SIGN},
    dd::DecimalDegrees,
    Directed, OutOfRange,
};

/// Whole degrees with the decimal minutes.
///
/// The sign is carried by the hemisphere when present,
/// otherwise by the sign of the `degrees`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreesMinutes {
    /// Latitude or longitude
    pub axis: AngleAxis,
    /// Whole degrees. Produced as a magnitude, but a negative value is accepted as the sign.
    pub degrees: i32,
    /// Minutes in `[0..60)`
    pub minutes: f64,
    /// Explicit direction
    #[cfg_attr(feature = "serde", serde(default))]
    pub hemisphere: Option<Hemisphere>,
}

impl DegreesMinutes {
    /// Construct without the explicit hemisphere
    pub fn new(axis: AngleAxis, degrees: i32, minutes: f64) -> Self {
        Self {
            axis,
            degrees,
            minutes,
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
    /// See [`dm_to_dd`].
    pub fn to_dd(self) -> Result<DecimalDegrees, OutOfRange> {
        dm_to_dd(self)
    }
}

impl Directed for DegreesMinutes {
    fn axis(self) -> AngleAxis {
        self.axis
    }

    fn hemisphere(self) -> Hemisphere {
        self.hemisphere
            .unwrap_or_else(|| hemisphere_from_sign(self.axis, f64::from(self.degrees)))
    }
}

impl fmt::Display for DegreesMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DM_DECIMALS);
        write!(
            f,
            "{}{} {:.precision$}{} {}",
            self.degrees.unsigned_abs(),
            DEGREE_SIGN,
            self.minutes,
            ARC_MINUTE_SIGN,
            Directed::hemisphere(*self),
        )
    }
}
