//! Error types for distance transform execution.
//!
//! Every variant is detected before any output cell is written, so an
//! `Err` always means the output buffer is untouched.

use std::error::Error;
use std::fmt;

use crate::extent::Extent;
use crate::scalar::ScalarType;

/// Errors from validating or executing a distance transform.
#[derive(Clone, Debug, PartialEq)]
pub enum EdtError {
    /// The output image is not `f64`.
    OutputNotDouble {
        /// Scalar type the output actually has.
        found: ScalarType,
    },
    /// The output image must have exactly one component per cell.
    OutputComponents {
        /// Component count the output actually has.
        found: usize,
    },
    /// An image was constructed with zero components per cell.
    ZeroComponents,
    /// Two images that must agree on component count do not.
    ComponentMismatch {
        /// Components of the destination.
        expected: usize,
        /// Components of the source.
        actual: usize,
    },
    /// Extent bounds are inverted on some axis.
    InvalidExtent {
        /// What went wrong.
        reason: String,
    },
    /// The requested extent is not covered by an image's data.
    ExtentOutOfBounds {
        /// Extent the caller asked to process.
        requested: Extent,
        /// Extent the image actually stores.
        available: Extent,
    },
    /// A buffer length does not match its extent and component count.
    LengthMismatch {
        /// Elements required by the extent.
        expected: usize,
        /// Elements supplied.
        actual: usize,
    },
    /// A spacing component is zero, negative, or not finite.
    InvalidSpacing {
        /// The offending spacing vector.
        spacing: [f64; 3],
    },
    /// An axis index outside `0..=2`.
    InvalidAxis {
        /// The offending index.
        index: usize,
    },
    /// A scalar type name that does not name a supported type.
    UnknownScalarType {
        /// The unrecognized name.
        name: String,
    },
}

impl fmt::Display for EdtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputNotDouble { found } => {
                write!(f, "output must be f64, got {found}")
            }
            Self::OutputComponents { found } => {
                write!(f, "output must have 1 component per cell, got {found}")
            }
            Self::ZeroComponents => write!(f, "image must have at least one component"),
            Self::ComponentMismatch { expected, actual } => {
                write!(f, "expected {expected} components per cell, got {actual}")
            }
            Self::InvalidExtent { reason } => write!(f, "invalid extent: {reason}"),
            Self::ExtentOutOfBounds {
                requested,
                available,
            } => write!(
                f,
                "requested extent {requested} not contained in data extent {available}"
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} elements, extent needs {expected}")
            }
            Self::InvalidSpacing { spacing } => {
                write!(f, "spacing must be finite and positive, got {spacing:?}")
            }
            Self::InvalidAxis { index } => write!(f, "axis index {index} out of range 0..=2"),
            Self::UnknownScalarType { name } => write!(f, "unknown scalar type '{name}'"),
        }
    }
}

impl Error for EdtError {}
