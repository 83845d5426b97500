use std::{error::Error, fmt};

use crate::{coord::AngleAxis, enum_trivial_from_impl};

/// Some part of an angle does not fit into its valid range
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutOfRange {
    /// The minutes value not in `[0..60)`
    ArcMinutes(f64),
    /// The seconds value not in `[0..60)`
    ArcSeconds(f64),
    /// The degrees exceed the range of the axis
    /// (`[-90..90]` for latitude, `[-180..180]` for longitude)
    Axis {
        /// The axis which range is violated
        axis: AngleAxis,
        /// The offending value
        degrees: f64,
    },
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArcMinutes(min) => {
                write!(f, "Angle's arc minute value not in range [0..60): {min}")
            }
            Self::ArcSeconds(sec) => {
                write!(f, "Angle's arc second value not in range [0..60): {sec}")
            }
            Self::Axis { axis, degrees } => {
                let max = axis.max_degrees();
                write!(f, "Invalid {axis} {degrees}: must be in range [-{max}..{max}]")
            }
        }
    }
}

impl Error for OutOfRange {}

/// The value cannot be represented as a finite number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber {
    label: String,
    input: String,
}

impl InvalidNumber {
    pub(crate) fn new(label: &str, input: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            input: input.into(),
        }
    }

    /// The name of the quantity failed to convert
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rejected input as it was provided
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {:?} is not a finite number", self.label, self.input)
    }
}

impl Error for InvalidNumber {}

/// Failure of turning raw input into decimal degrees
#[derive(Debug, Clone, PartialEq)]
pub enum ParseAngleError {
    /// Some part of the angle is out of range
    Range(OutOfRange),
    /// Not a finite number
    Number(InvalidNumber),
    /// Neither a string nor a number provided
    UnsupportedInput,
    /// No numbers found in the text
    UnrecognizedFormat(String),
}

enum_trivial_from_impl!(OutOfRange => ParseAngleError:Range);
enum_trivial_from_impl!(InvalidNumber => ParseAngleError:Number);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Number(inner) => write!(f, "{inner}"),
            Self::UnsupportedInput => write!(f, "expected a string or a number"),
            Self::UnrecognizedFormat(input) => {
                write!(f, "unrecognized coordinate format {input:?}")
            }
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Number(inner) => Some(inner),
            Self::UnsupportedInput | Self::UnrecognizedFormat(_) => None,
        }
    }
}
