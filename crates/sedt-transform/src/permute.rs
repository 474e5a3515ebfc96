//! Axis permutation for single-implementation passes.
//!
//! Every pass is written once, scanning along *logical* axis 0. An
//! [`AxisPermutation`] maps the active physical axis onto logical axis 0
//! and the remaining two onto logical axes 1 and 2:
//!
//! | active | logical 0 | logical 1 | logical 2 |
//! |--------|-----------|-----------|-----------|
//! | x      | x         | y         | z         |
//! | y      | y         | x         | z         |
//! | z      | z         | x         | y         |
//!
//! A [`Traversal`] binds that ordering to one image's strides and a
//! processed extent. It is built once per pass so the hot loops see
//! plain integers, not axis matches.

use sedt_core::{Axis, EdtError, Extent, Image, Scalar};

/// Logical-to-physical axis mapping for one active axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPermutation {
    axes: [Axis; 3],
}

impl AxisPermutation {
    /// Permutation that makes `active` logical axis 0.
    pub fn for_axis(active: Axis) -> Self {
        let axes = match active {
            Axis::X => [Axis::X, Axis::Y, Axis::Z],
            Axis::Y => [Axis::Y, Axis::X, Axis::Z],
            Axis::Z => [Axis::Z, Axis::X, Axis::Y],
        };
        Self { axes }
    }

    /// The axis scanned along logical axis 0.
    pub fn active(&self) -> Axis {
        self.axes[0]
    }

    /// Physical axis behind each logical axis.
    pub fn axes(&self) -> [Axis; 3] {
        self.axes
    }

    /// Reordered `(min0, max0, min1, max1, min2, max2)`.
    pub fn permute_extent(&self, extent: &Extent) -> [i32; 6] {
        let [a0, a1, a2] = self.axes;
        [
            extent.axis_min(a0),
            extent.axis_max(a0),
            extent.axis_min(a1),
            extent.axis_max(a1),
            extent.axis_min(a2),
            extent.axis_max(a2),
        ]
    }

    /// Reordered `(inc0, inc1, inc2)`.
    pub fn permute_increments(&self, increments: [usize; 3]) -> [usize; 3] {
        self.axes.map(|a| increments[a.index()])
    }
}

/// Row walk over one image: the buffer index of the first cell of the
/// processed extent, plus permuted strides and lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// Buffer index of the extent's min corner.
    pub start: usize,
    /// Element step along logical axes 0, 1, 2.
    pub inc: [usize; 3],
    /// Cells along logical axes 0, 1, 2.
    pub len: [usize; 3],
}

impl Traversal {
    /// Bind a permutation to `image` over `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] if `extent` is not inside
    /// the image's data.
    pub fn new<T: Scalar>(
        perm: &AxisPermutation,
        image: &Image<T>,
        extent: &Extent,
    ) -> Result<Self, EdtError> {
        image.require_contains(extent)?;
        let start = image
            .index_of(extent.min())
            .ok_or(EdtError::ExtentOutOfBounds {
                requested: *extent,
                available: image.extent(),
            })?;
        Ok(Self {
            start,
            inc: perm.permute_increments(image.increments()),
            len: perm.axes().map(|a| extent.len(a)),
        })
    }

    /// Number of rows (cells across logical axes 1 and 2).
    pub fn row_count(&self) -> usize {
        self.len[1] * self.len[2]
    }

    /// Buffer index of the first cell of every row, logical axis 1
    /// fastest.
    pub fn row_starts(&self) -> impl Iterator<Item = usize> {
        let Self { start, inc, len } = *self;
        let row = move |i2: usize| (0..len[1]).map(move |i1| start + i1 * inc[1] + i2 * inc[2]);
        (0..len[2]).flat_map(row)
    }
}
