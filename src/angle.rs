//! The three representations of a coordinate angle:
//! decimal degrees, degrees-minutes and degrees-minutes-seconds.

use crate::coord::{AngleAxis, Hemisphere};

pub(crate) mod consts;
pub mod dd;
pub mod dm;
pub mod dms;
mod errors;

pub use errors::{InvalidNumber, OutOfRange, ParseAngleError};

/// An angle bound to a coordinate axis and therefore having a direction
pub trait Directed: Copy {
    /// The axis (latitude or longitude) of the angle
    fn axis(self) -> AngleAxis;

    /// The direction of the angle. Explicitly stored one takes
    /// precedence over the one derived from the sign.
    fn hemisphere(self) -> Hemisphere;
}
