//! Geographic coordinates conversion between the decimal degrees (DD),
//! degrees-minutes (DM) and degrees-minutes-seconds (DMS) representations.
//!
//! ```
//! use geod_dms::{dd_to_dms, format_dms, parse_to_dd, AngleAxis, ConversionOptions};
//!
//! let dd = parse_to_dd("48° 51' 23.76\" N", AngleAxis::Latitude)?;
//! assert!((dd.degrees - 48.8566).abs() < 1e-9);
//!
//! let dms = dd_to_dms(dd, ConversionOptions::default());
//! assert_eq!(format_dms(dms, 2), "48° 51' 23.76\" N");
//! # Ok::<(), geod_dms::ParseAngleError>(())
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    dd::DecimalDegrees, dm::DegreesMinutes, dms::DegreesMinutesSeconds, Directed, InvalidNumber,
    OutOfRange, ParseAngleError,
};
pub use convert::{
    dd_pair_to_dm, dd_pair_to_dms, dd_to_dm, dd_to_dms, dm_pair_to_dd, dm_to_dd, dms_pair_to_dd,
    dms_to_dd, ConversionOptions,
};
pub use coord::{
    apply_hemisphere_sign, assert_in_range, axis_from_hemisphere, clamp_to_axis_range,
    hemisphere_from_sign, AngleAxis, Hemisphere, ParseHemisphereError,
};
pub use format::{
    format_dd, format_dd_pair, format_dm, format_dm_pair, format_dms, format_dms_pair,
    DD_DECIMALS, DMS_DECIMALS, DM_DECIMALS,
};
pub use parse::{coerce_finite, parse_pair_to_dd, parse_to_dd, RawAngle};

mod angle;
mod convert;
mod coord;
mod format;
mod parse;
mod utils;

// only exercised with the `serde` feature
#[cfg(test)]
use serde_json as _;
