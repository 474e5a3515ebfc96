//! Region splitting for parallel or streamed execution of one pass.
//!
//! A pass may be run piecewise over disjoint sub-extents as long as no
//! piece cuts a row in two. The splitter therefore never divides the
//! active axis: it picks the highest-indexed *other* axis that spans
//! more than one cell and cuts it into near-equal contiguous ranges.
//! When no such axis exists the extent is a single piece.

use log::{debug, warn};
use smallvec::SmallVec;

use sedt_core::{Axis, Extent};

/// Pieces of one split, inline for typical worker counts.
pub type Pieces = SmallVec<[Extent; 8]>;

/// Axis a split of `extent` would cut, or `None` if it cannot be split
/// without dividing `active`.
pub fn split_axis(extent: &Extent, active: Axis) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .rev()
        .find(|&axis| axis != active && extent.len(axis) > 1)
}

/// Number of pieces a request for `requested` pieces actually yields.
///
/// Always in `1..=max(requested, 1)`. Returns 1 when the extent cannot
/// be split.
pub fn piece_count(extent: &Extent, active: Axis, requested: usize) -> usize {
    let requested = requested.max(1);
    match split_axis(extent, active) {
        Some(axis) => requested.min(extent.len(axis)),
        None => 1,
    }
}

/// The `num`-th (0-based) of `total` requested pieces.
///
/// `total` is clamped exactly as [`piece_count`] does; pieces with
/// `num` at or beyond the clamped count do not exist and yield `None`.
/// Piece `num` starts at `min + len * num / total`; the last piece ends
/// at `max`.
pub fn split_extent(extent: &Extent, active: Axis, num: usize, total: usize) -> Option<Extent> {
    debug!(
        "split_extent: {extent}, {num} of {total}, active axis {active}"
    );

    let Some(axis) = split_axis(extent, active) else {
        debug!("  cannot split");
        return (num == 0).then_some(*extent);
    };

    let total = piece_count(extent, active, total);
    if num >= total {
        warn!("split request {num} beyond piece count {total}");
        return None;
    }

    let min = i64::from(extent.axis_min(axis));
    let max = i64::from(extent.axis_max(axis));
    let len = max - min + 1;
    let (num, total) = (num as i64, total as i64);

    let lo = min + len * num / total;
    let hi = if num == total - 1 {
        max
    } else {
        min - 1 + len * (num + 1) / total
    };

    // Both ends lie in [min, max], so they fit back into i32.
    let piece = extent.with_axis(axis, lo as i32, hi as i32).ok()?;
    debug!("  split piece: {piece}");
    Some(piece)
}

/// Every piece of a split of `extent` into `requested` parts, in order.
pub fn pieces(extent: &Extent, active: Axis, requested: usize) -> Pieces {
    let total = piece_count(extent, active, requested);
    (0..total)
        .filter_map(|num| split_extent(extent, active, num, total))
        .collect()
}
