//! Human-readable rendering of the coordinates.
//!
//! The degrees are always printed as the whole magnitude followed by the hemisphere letter,
//! only the smallest unit has the configurable number of decimal digits.

use crate::angle::{dd::DecimalDegrees, dm::DegreesMinutes, dms::DegreesMinutesSeconds};

/// The default number of decimal digits for the decimal degrees
pub const DD_DECIMALS: usize = 5;
/// The default number of decimal digits for the minutes of the [`DegreesMinutes`]
pub const DM_DECIMALS: usize = 2;
/// The default number of decimal digits for the seconds of the [`DegreesMinutesSeconds`]
pub const DMS_DECIMALS: usize = 2;

/// Render as `48.85440° N`
pub fn format_dd(dd: DecimalDegrees, decimals: usize) -> String {
    format!("{dd:.decimals$}")
}

/// Render as `48° 51.26' N`
pub fn format_dm(dm: DegreesMinutes, decimals: usize) -> String {
    format!("{dm:.decimals$}")
}

/// Render as `48° 51' 15.84" N`
pub fn format_dms(dms: DegreesMinutesSeconds, decimals: usize) -> String {
    format!("{dms:.decimals$}")
}

/// Render the (latitude, longitude) pair with the [`format_dd`]
pub fn format_dd_pair(pair: (DecimalDegrees, DecimalDegrees), decimals: usize) -> (String, String) {
    let (lat, lon) = pair;
    (format_dd(lat, decimals), format_dd(lon, decimals))
}

/// Render the (latitude, longitude) pair with the [`format_dm`]
pub fn format_dm_pair(pair: (DegreesMinutes, DegreesMinutes), decimals: usize) -> (String, String) {
    let (lat, lon) = pair;
    (format_dm(lat, decimals), format_dm(lon, decimals))
}

/// Render the (latitude, longitude) pair with the [`format_dms`]
pub fn format_dms_pair(
    pair: (DegreesMinutesSeconds, DegreesMinutesSeconds),
    decimals: usize,
) -> (String, String) {
    let (lat, lon) = pair;
    (format_dms(lat, decimals), format_dms(lon, decimals))
}
