//! Physical voxel spacing.

use crate::axis::Axis;
use crate::error::EdtError;

/// Physical size of a voxel along each axis.
///
/// Only consulted when anisotropy is considered; each pass squares the
/// component for its active axis and folds it into the distance unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing([f64; 3]);

impl Spacing {
    /// Build a spacing vector.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::InvalidSpacing`] unless every component is
    /// finite and strictly positive.
    pub fn new(spacing: [f64; 3]) -> Result<Self, EdtError> {
        if spacing.iter().all(|s| s.is_finite() && *s > 0.0) {
            Ok(Self(spacing))
        } else {
            Err(EdtError::InvalidSpacing { spacing })
        }
    }

    /// Spacing along one axis.
    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// All three components.
    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self([1.0; 3])
    }
}
