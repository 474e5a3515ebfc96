//! Inclusive 3D index extents.
//!
//! An [`Extent`] is the six-integer `[xMin, xMax, yMin, yMax, zMin, zMax]`
//! box used everywhere in sedt: the region an image stores, the region a
//! pass processes, and the pieces the region splitter hands to workers.
//! Bounds are inclusive and may be negative.

use std::fmt;

use crate::axis::Axis;
use crate::error::EdtError;

/// Inclusive axis-aligned index box. Invariant: `min[a] <= max[a]` on
/// every axis, enforced by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    min: [i32; 3],
    max: [i32; 3],
}

impl Extent {
    /// Build from per-axis bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::InvalidExtent`] if `min > max` on any axis.
    pub fn new(min: [i32; 3], max: [i32; 3]) -> Result<Self, EdtError> {
        for axis in Axis::ALL {
            let a = axis.index();
            if min[a] > max[a] {
                return Err(EdtError::InvalidExtent {
                    reason: format!("{axis} min {} exceeds max {}", min[a], max[a]),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Build from the classic `[xMin, xMax, yMin, yMax, zMin, zMax]` layout.
    pub fn from_array(ext: [i32; 6]) -> Result<Self, EdtError> {
        Self::new([ext[0], ext[2], ext[4]], [ext[1], ext[3], ext[5]])
    }

    /// Extent `[0, nx-1] x [0, ny-1] x [0, nz-1]`.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::InvalidExtent`] if any dimension is zero or does
    /// not fit in `i32`.
    pub fn from_dims(dims: [usize; 3]) -> Result<Self, EdtError> {
        let mut max = [0i32; 3];
        for (a, &d) in dims.iter().enumerate() {
            if d == 0 {
                return Err(EdtError::InvalidExtent {
                    reason: format!("dimension {a} is zero"),
                });
            }
            max[a] = i32::try_from(d - 1).map_err(|_| EdtError::InvalidExtent {
                reason: format!("dimension {a} ({d}) exceeds i32 range"),
            })?;
        }
        Ok(Self { min: [0; 3], max })
    }

    /// Back to `[xMin, xMax, yMin, yMax, zMin, zMax]`.
    pub fn to_array(&self) -> [i32; 6] {
        [
            self.min[0],
            self.max[0],
            self.min[1],
            self.max[1],
            self.min[2],
            self.max[2],
        ]
    }

    /// Lower bounds.
    pub fn min(&self) -> [i32; 3] {
        self.min
    }

    /// Upper bounds (inclusive).
    pub fn max(&self) -> [i32; 3] {
        self.max
    }

    /// Lower bound on one axis.
    pub fn axis_min(&self, axis: Axis) -> i32 {
        self.min[axis.index()]
    }

    /// Upper bound on one axis.
    pub fn axis_max(&self, axis: Axis) -> i32 {
        self.max[axis.index()]
    }

    /// Number of cells along `axis`. Always at least 1.
    pub fn len(&self, axis: Axis) -> usize {
        let a = axis.index();
        (i64::from(self.max[a]) - i64::from(self.min[a]) + 1) as usize
    }

    /// Cells along each axis.
    pub fn dims(&self) -> [usize; 3] {
        [self.len(Axis::X), self.len(Axis::Y), self.len(Axis::Z)]
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.dims().iter().product()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Extent) -> bool {
        (0..3).all(|a| self.min[a] <= other.min[a] && other.max[a] <= self.max[a])
    }

    /// True when `coord` lies inside `self`.
    pub fn contains_coord(&self, coord: [i32; 3]) -> bool {
        (0..3).all(|a| self.min[a] <= coord[a] && coord[a] <= self.max[a])
    }

    /// True when the two extents share at least one cell.
    pub fn intersects(&self, other: &Extent) -> bool {
        (0..3).all(|a| self.min[a] <= other.max[a] && other.min[a] <= self.max[a])
    }

    /// Copy of `self` with one axis replaced.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::InvalidExtent`] if `min > max`.
    pub fn with_axis(&self, axis: Axis, min: i32, max: i32) -> Result<Self, EdtError> {
        let mut lo = self.min;
        let mut hi = self.max;
        lo[axis.index()] = min;
        hi[axis.index()] = max;
        Self::new(lo, hi)
    }

    /// Cell coordinates in row-major order (x fastest).
    pub fn cells(&self) -> impl Iterator<Item = [i32; 3]> {
        let (min, max) = (self.min, self.max);
        (min[2]..=max[2]).flat_map(move |z| {
            (min[1]..=max[1]).flat_map(move |y| (min[0]..=max[0]).map(move |x| [x, y, z]))
        })
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.to_array();
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            e[0], e[1], e[2], e[3], e[4], e[5]
        )
    }
}
