//! Spatial axes of a 3D grid.

use std::fmt;

use crate::error::EdtError;

/// One of the three spatial axes.
///
/// Doubles as the pass iteration: pass `k` scans along `Axis::ALL[k]`,
/// and the axis index selects the matching spacing component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First axis, contiguous in memory.
    X,
    /// Second axis.
    Y,
    /// Third axis, outermost in memory.
    Z,
}

impl Axis {
    /// All axes in pass order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis (0, 1, or 2).
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = EdtError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(EdtError::InvalidAxis { index }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}
