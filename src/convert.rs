//! Pure numeric transformations between the decimal and sexagesimal representations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    angle::{
        consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
        dd::DecimalDegrees,
        dm::DegreesMinutes,
        dms::DegreesMinutesSeconds,
        OutOfRange,
    },
    coord::{
        apply_hemisphere_sign, assert_in_range, clamp_to_axis_range, hemisphere_from_sign,
        Hemisphere,
    },
    utils::round_to,
};

/// Settings of the decimal to sexagesimal conversion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// The number of decimal digits kept in the smallest unit (minutes or seconds)
    pub decimals: usize,
    /// Saturate the out of range degrees at the axis bounds before the conversion
    pub clamp: bool,
}

impl ConversionOptions {
    /// The default number of decimal digits
    pub const DEFAULT_DECIMALS: usize = 2;

    /// Replace the number of decimal digits
    #[must_use]
    pub fn with_decimals(self, decimals: usize) -> Self {
        Self { decimals, ..self }
    }

    /// Enable or disable the clamping
    #[must_use]
    pub fn with_clamp(self, clamp: bool) -> Self {
        Self { clamp, ..self }
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            decimals: Self::DEFAULT_DECIMALS,
            clamp: false,
        }
    }
}

fn prepared_degrees(dd: DecimalDegrees, clamp: bool) -> f64 {
    if !clamp {
        return dd.degrees;
    }

    let clamped = clamp_to_axis_range(dd.axis, dd.degrees);
    if clamped != dd.degrees {
        debug!(axis = %dd.axis, degrees = dd.degrees, clamped, "degrees clamped to the axis range");
    }
    clamped
}

/// Split the decimal degrees into whole degrees and decimal minutes.
///
/// When rounding the minutes reaches the full 60, the degree is shifted away from zero
/// and the direction is derived once again from the shifted value.
/// The values out of the axis range are converted as is unless the `clamp` option is set.
#[allow(clippy::cast_possible_truncation)]
pub fn dd_to_dm(dd: DecimalDegrees, options: ConversionOptions) -> DegreesMinutes {
    let degrees = prepared_degrees(dd, options.clamp);
    let whole = degrees.trunc();
    let fraction = (degrees - whole).abs();

    let minutes = round_to(fraction * f64::from(MINUTES_IN_DEGREE), options.decimals);
    if minutes >= f64::from(MINUTES_IN_DEGREE) {
        // `trunc` keeps the sign of zero, and -0 counts as non-negative here
        let rolled = if whole >= 0.0 { whole + 1.0 } else { whole - 1.0 };
        return DegreesMinutes {
            axis: dd.axis,
            degrees: rolled.abs() as i32,
            minutes: 0.0,
            hemisphere: Some(hemisphere_from_sign(dd.axis, rolled)),
        };
    }

    DegreesMinutes {
        axis: dd.axis,
        degrees: whole.abs() as i32,
        minutes,
        hemisphere: Some(hemisphere_from_sign(dd.axis, degrees)),
    }
}

/// Split the decimal degrees into whole degrees, whole minutes and decimal seconds.
///
/// Rounding overflow of the seconds carries into the minutes and then into the degrees magnitude.
/// The direction is always taken from the source value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dd_to_dms(dd: DecimalDegrees, options: ConversionOptions) -> DegreesMinutesSeconds {
    let degrees = prepared_degrees(dd, options.clamp);
    let whole = degrees.trunc();
    let fraction = (degrees - whole).abs();

    let total_minutes = fraction * f64::from(MINUTES_IN_DEGREE);
    // fraction < 1, so the minutes are in [0..60)
    let mut minutes = total_minutes.floor() as u8;
    let mut seconds = round_to(
        fraction * SECONDS_IN_DEGREE - f64::from(minutes) * f64::from(SECONDS_IN_MINUTE),
        options.decimals,
    );
    let mut magnitude = whole.abs() as i32;

    if seconds >= f64::from(SECONDS_IN_MINUTE) {
        seconds = 0.0;
        minutes += 1;
    }

    if minutes >= MINUTES_IN_DEGREE {
        minutes = 0;
        magnitude = magnitude.saturating_add(1);
    }

    DegreesMinutesSeconds {
        axis: dd.axis,
        degrees: magnitude,
        minutes,
        seconds,
        hemisphere: Some(hemisphere_from_sign(dd.axis, degrees)),
    }
}

fn check_minutes(minutes: f64) -> Result<(), OutOfRange> {
    if (0.0..f64::from(MINUTES_IN_DEGREE)).contains(&minutes) {
        Ok(())
    } else {
        Err(OutOfRange::ArcMinutes(minutes))
    }
}

fn check_seconds(seconds: f64) -> Result<(), OutOfRange> {
    if (0.0..f64::from(SECONDS_IN_MINUTE)).contains(&seconds) {
        Ok(())
    } else {
        Err(OutOfRange::ArcSeconds(seconds))
    }
}

/// The negative degrees give the sign, but the hemisphere (if any) takes precedence
fn signed_with_hemisphere(degrees: i32, magnitude: f64, hemisphere: Option<Hemisphere>) -> f64 {
    let signed = if degrees < 0 { -magnitude } else { magnitude };
    apply_hemisphere_sign(signed, hemisphere)
}

/// Combine the degrees and minutes into the decimal degrees.
///
/// # Errors
/// - [`OutOfRange::ArcMinutes`] when the minutes are not in `[0..60)`;
/// - [`OutOfRange::Axis`] when the result exceeds the range of the axis.
///   No clamping is ever applied here.
pub fn dm_to_dd(dm: DegreesMinutes) -> Result<DecimalDegrees, OutOfRange> {
    check_minutes(dm.minutes)?;

    let magnitude =
        f64::from(dm.degrees.unsigned_abs()) + dm.minutes / f64::from(MINUTES_IN_DEGREE);
    let degrees = signed_with_hemisphere(dm.degrees, magnitude, dm.hemisphere);
    let degrees = assert_in_range(dm.axis, degrees)?;
    Ok(DecimalDegrees::new(dm.axis, degrees))
}

/// Combine the degrees, minutes and seconds into the decimal degrees.
///
/// # Errors
/// - [`OutOfRange::ArcMinutes`] when the minutes are not in `[0..60)`;
/// - [`OutOfRange::ArcSeconds`] when the seconds are not in `[0..60)`;
/// - [`OutOfRange::Axis`] when the result exceeds the range of the axis.
pub fn dms_to_dd(dms: DegreesMinutesSeconds) -> Result<DecimalDegrees, OutOfRange> {
    check_minutes(f64::from(dms.minutes))?;
    check_seconds(dms.seconds)?;

    let magnitude = f64::from(dms.degrees.unsigned_abs())
        + f64::from(dms.minutes) / f64::from(MINUTES_IN_DEGREE)
        + dms.seconds / SECONDS_IN_DEGREE;
    let degrees = signed_with_hemisphere(dms.degrees, magnitude, dms.hemisphere);
    let degrees = assert_in_range(dms.axis, degrees)?;
    Ok(DecimalDegrees::new(dms.axis, degrees))
}

/// Convert the (latitude, longitude) pair with the [`dd_to_dm`]
pub fn dd_pair_to_dm(
    pair: (DecimalDegrees, DecimalDegrees),
    options: ConversionOptions,
) -> (DegreesMinutes, DegreesMinutes) {
    let (lat, lon) = pair;
    (dd_to_dm(lat, options), dd_to_dm(lon, options))
}

/// Convert the (latitude, longitude) pair with the [`dd_to_dms`]
pub fn dd_pair_to_dms(
    pair: (DecimalDegrees, DecimalDegrees),
    options: ConversionOptions,
) -> (DegreesMinutesSeconds, DegreesMinutesSeconds) {
    let (lat, lon) = pair;
    (dd_to_dms(lat, options), dd_to_dms(lon, options))
}

/// Convert the (latitude, longitude) pair with the [`dm_to_dd`].
///
/// # Errors
/// The first failure in order (latitude, then longitude).
pub fn dm_pair_to_dd(
    pair: (DegreesMinutes, DegreesMinutes),
) -> Result<(DecimalDegrees, DecimalDegrees), OutOfRange> {
    let (lat, lon) = pair;
    Ok((dm_to_dd(lat)?, dm_to_dd(lon)?))
}

/// Convert the (latitude, longitude) pair with the [`dms_to_dd`].
///
/// # Errors
/// The first failure in order (latitude, then longitude).
pub fn dms_pair_to_dd(
    pair: (DegreesMinutesSeconds, DegreesMinutesSeconds),
) -> Result<(DecimalDegrees, DecimalDegrees), OutOfRange> {
    let (lat, lon) = pair;
    Ok((dms_to_dd(lat)?, dms_to_dd(lon)?))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::coord::AngleAxis;

    use super::*;

    #[test]
    fn dm_uses_short_codes() {
        let dm = DegreesMinutes::new(AngleAxis::Longitude, 70, 40.0)
            .with_hemisphere(Hemisphere::West);
        let json = serde_json::to_string(&dm).unwrap();
        assert_eq!(
            json,
            r#"{"axis":"lon","degrees":70,"minutes":40.0,"hemisphere":"W"}"#
        );

        let back: DegreesMinutes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dm);
    }

    #[test]
    fn dm_without_hemisphere() {
        let dm: DegreesMinutes =
            serde_json::from_str(r#"{"axis":"lat","degrees":-33,"minutes":27.0}"#).unwrap();
        assert_eq!(dm, DegreesMinutes::new(AngleAxis::Latitude, -33, 27.0));
    }

    #[test]
    fn partial_options() {
        let options: ConversionOptions = serde_json::from_str(r#"{"clamp":true}"#).unwrap();
        assert_eq!(options.decimals, 2);
        assert!(options.clamp);

        let options: ConversionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    #[should_panic(expected = "unknown variant `X`")]
    fn unknown_hemisphere_code() {
        let _h: Hemisphere = serde_json::from_str(r#""X""#).unwrap();
    }
}
