//! One 1D distance pass over an extent.
//!
//! A pass scans every row of the extent along its active axis. Axis x
//! runs the seed transform on the thresholded mask; axes y and z run the
//! lower-envelope update on the field left by the previous pass.
//!
//! The two [`Algorithm`] variants compute the same values:
//!
//! - [`direct_pass`] snapshots each row into `buff` and writes
//!   improvements straight back through the grid's stride.
//! - [`cached_pass`] also copies the row into `temp`, scans with only
//!   contiguous accesses, then writes `temp` back once.
//!
//! The seed transform on x runs in place for both.

use sedt_core::{Axis, EdtError, Extent, Image};

use crate::config::{Algorithm, EdtConfig};
use crate::permute::{AxisPermutation, Traversal};
use crate::saito::{envelope_row, seed_row, StridedRow};
use crate::scratch::PassScratch;

/// Squared distance unit for `axis`: its squared spacing, or 1.
pub fn axis_unit(config: &EdtConfig, field: &Image<f64>, axis: Axis) -> f64 {
    if config.consider_anisotropy {
        let s = field.spacing().get(axis);
        s * s
    } else {
        1.0
    }
}

/// Run one pass along `axis` over `extent`, in place on `field`.
///
/// Returns the number of rows processed.
///
/// # Errors
///
/// Returns [`EdtError::ExtentOutOfBounds`] if `field` does not cover
/// `extent`. Nothing is written on error.
pub fn distance_pass(
    config: &EdtConfig,
    axis: Axis,
    field: &mut Image<f64>,
    extent: &Extent,
    scratch: &mut PassScratch,
) -> Result<usize, EdtError> {
    match config.algorithm {
        Algorithm::Direct => direct_pass(config, axis, field, extent, scratch),
        Algorithm::CacheOptimized => cached_pass(config, axis, field, extent, scratch),
    }
}

/// Direct variant: strided writes into the grid.
///
/// # Errors
///
/// See [`distance_pass`].
pub fn direct_pass(
    config: &EdtConfig,
    axis: Axis,
    field: &mut Image<f64>,
    extent: &Extent,
    scratch: &mut PassScratch,
) -> Result<usize, EdtError> {
    let walk = prepare(config, axis, field, extent, scratch)?;
    if axis == Axis::X {
        return Ok(seed_rows(&walk, field, scratch));
    }

    let unit = axis_unit(config, field, axis);
    let PassScratch { sq, buff, .. } = scratch;
    let data = field.data_mut();
    let stride = walk.inc[0];
    for start in walk.row_starts() {
        for (i, slot) in buff.iter_mut().enumerate() {
            *slot = data[start + i * stride];
        }
        let mut row = StridedRow {
            data: &mut *data,
            start,
            stride,
        };
        envelope_row(buff, &mut row, sq, unit);
    }
    Ok(walk.row_count())
}

/// Cache-optimized variant: every scan access is contiguous.
///
/// # Errors
///
/// See [`distance_pass`].
pub fn cached_pass(
    config: &EdtConfig,
    axis: Axis,
    field: &mut Image<f64>,
    extent: &Extent,
    scratch: &mut PassScratch,
) -> Result<usize, EdtError> {
    let walk = prepare(config, axis, field, extent, scratch)?;
    if axis == Axis::X {
        return Ok(seed_rows(&walk, field, scratch));
    }

    let unit = axis_unit(config, field, axis);
    let PassScratch { sq, buff, temp } = scratch;
    let data = field.data_mut();
    let stride = walk.inc[0];
    for start in walk.row_starts() {
        for (i, (b, t)) in buff.iter_mut().zip(temp.iter_mut()).enumerate() {
            let v = data[start + i * stride];
            *b = v;
            *t = v;
        }
        envelope_row(buff, temp.as_mut_slice(), sq, unit);
        for (i, t) in temp.iter().enumerate() {
            data[start + i * stride] = *t;
        }
    }
    Ok(walk.row_count())
}

fn prepare(
    config: &EdtConfig,
    axis: Axis,
    field: &Image<f64>,
    extent: &Extent,
    scratch: &mut PassScratch,
) -> Result<Traversal, EdtError> {
    let walk = Traversal::new(&AxisPermutation::for_axis(axis), field, extent)?;
    scratch.prepare(
        walk.len[0],
        axis_unit(config, field, axis),
        config.maximum_distance,
    );
    Ok(walk)
}

fn seed_rows(walk: &Traversal, field: &mut Image<f64>, scratch: &PassScratch) -> usize {
    let data = field.data_mut();
    for start in walk.row_starts() {
        let mut row = StridedRow {
            data: &mut *data,
            start,
            stride: walk.inc[0],
        };
        seed_row(&mut row, walk.len[0], &scratch.sq);
    }
    walk.row_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedt_core::Spacing;

    fn field(dims: [usize; 3], values: Vec<f64>) -> Image<f64> {
        Image::from_vec(Extent::from_dims(dims).unwrap(), 1, values).unwrap()
    }

    fn config(algorithm: Algorithm, max: f64) -> EdtConfig {
        EdtConfig {
            maximum_distance: max,
            algorithm,
            ..EdtConfig::default()
        }
    }

    fn run(
        cfg: &EdtConfig,
        axis: Axis,
        f: &mut Image<f64>,
        extent: &Extent,
    ) -> Result<usize, EdtError> {
        distance_pass(cfg, axis, f, extent, &mut PassScratch::new())
    }

    #[test]
    fn seed_pass_on_x_row() {
        for algorithm in [Algorithm::Direct, Algorithm::CacheOptimized] {
            let mut f = field([5, 1, 1], vec![0.0, 100.0, 100.0, 100.0, 0.0]);
            let ext = f.extent();
            let rows = run(&config(algorithm, 100.0), Axis::X, &mut f, &ext).unwrap();
            assert_eq!(rows, 1);
            assert_eq!(f.data(), &[0.0, 1.0, 4.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn y_pass_scans_columns() {
        // 2 x 3 field, x-distances already computed; column x=0 has a zero.
        let mut f = field([2, 3, 1], vec![0.0, 1.0, 9.0, 9.0, 9.0, 9.0]);
        let ext = f.extent();
        let rows = run(&config(Algorithm::Direct, 9.0), Axis::Y, &mut f, &ext).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(f.data(), &[0.0, 1.0, 1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn z_pass_uses_z_spacing() {
        let mut f = field([1, 1, 3], vec![0.0, 1e6, 1e6]);
        f.set_spacing(Spacing::new([1.0, 1.0, 3.0]).unwrap());
        let ext = f.extent();
        for algorithm in [Algorithm::Direct, Algorithm::CacheOptimized] {
            let mut g = f.clone();
            run(&config(algorithm, 1e6), Axis::Z, &mut g, &ext).unwrap();
            assert_eq!(g.data(), &[0.0, 9.0, 36.0]);
        }
    }

    #[test]
    fn anisotropy_ignored_when_disabled() {
        let mut f = field([1, 1, 3], vec![0.0, 1e6, 1e6]);
        f.set_spacing(Spacing::new([1.0, 1.0, 3.0]).unwrap());
        let ext = f.extent();
        let cfg = EdtConfig {
            maximum_distance: 1e6,
            consider_anisotropy: false,
            ..EdtConfig::default()
        };
        run(&cfg, Axis::Z, &mut f, &ext).unwrap();
        assert_eq!(f.data(), &[0.0, 1.0, 4.0]);
    }

    #[test]
    fn sub_extent_leaves_rest_untouched() {
        let mut f = field([3, 3, 1], vec![0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0]);
        let sub = Extent::from_array([0, 2, 0, 0, 0, 0]).unwrap();
        run(&config(Algorithm::Direct, 5.0), Axis::X, &mut f, &sub).unwrap();
        assert_eq!(&f.data()[..3], &[0.0, 1.0, 4.0]);
        assert!(f.data()[3..].iter().all(|&v| v == 5.0));
    }

    #[test]
    fn rejects_extent_outside_field() {
        let mut f = field([2, 2, 1], vec![0.0; 4]);
        let big = Extent::from_dims([2, 3, 1]).unwrap();
        let cached = config(Algorithm::CacheOptimized, 1.0);
        assert!(run(&cached, Axis::Y, &mut f, &big).is_err());
    }
}
