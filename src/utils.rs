//! Utilities functions which do not linked to domain

use std::ops::Neg;

use num_traits::{Float, NumCast};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Allow conversion of a signed value into its unsigned equivalent
/// by dropping the sign away
pub(crate) trait ToUnsigned<U>: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// represent the source (signed) type as target (unsigned) type
    fn as_type(self) -> U;

    /// Converts to unsigned absolute value.
    /// The flag is `true` for the non-negative values (zero included).
    fn unsigned_abs(self) -> (U, bool) {
        if self >= Self::default() {
            (self.as_type(), true)
        } else {
            ((-self).as_type(), false)
        }
    }
}

macro_rules! impl_unsigned_abs {
    ($same: ty) => {
        impl ToUnsigned<$same> for $same {
            fn as_type(self) -> Self {
                self
            }
        }
    };
}

impl_unsigned_abs!(f64);

/// Round the value to the given number of decimal digits.
///
/// Halves are rounded away from zero.
pub(crate) fn round_to<T: Float>(value: T, decimals: usize) -> T {
    let ten = <T as NumCast>::from(10_u8);
    let Some(factor) = ten.map(|ten| ten.powi(exponent(decimals))) else {
        return value;
    };

    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        // too many digits requested, nothing to round
        value
    }
}

fn exponent(decimals: usize) -> i32 {
    i32::try_from(decimals).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_float() {
        assert_eq!(7.5_f64.unsigned_abs(), (7.5, true));
        assert_eq!((-7.5_f64).unsigned_abs(), (7.5, false));
    }

    #[test]
    fn zero_is_positive() {
        assert_eq!(0.0_f64.unsigned_abs(), (0.0, true));
        assert!((-0.0_f64).unsigned_abs().1);
    }

    #[test]
    fn round_two_digits() {
        assert!((round_to(51.264_f64, 2) - 51.26).abs() < 1e-12);
        assert!((round_to(59.9994_f64, 2) - 60.0).abs() < 1e-12);
        assert!((round_to(59.94_f64, 2) - 59.94).abs() < 1e-12);
    }

    #[test]
    fn round_to_integer() {
        assert_eq!(round_to(2.5_f64, 0), 3.0);
        assert_eq!(round_to(2.4_f64, 0), 2.0);
    }

    #[test]
    fn round_huge_precision_keeps_value() {
        assert_eq!(round_to(1.234_f64, 400), 1.234);
    }
}
