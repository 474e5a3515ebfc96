//! Brute-force squared distance, for checking the separable passes.

use sedt_core::{Axis, Image, Scalar};

/// For every cell, the minimum squared (optionally spacing-weighted)
/// distance to any zero cell of component 0, clamped to
/// `maximum_distance`. No zero cell means every output is the clamp.
pub fn brute_force<T: Scalar>(
    mask: &Image<T>,
    maximum_distance: f64,
    consider_anisotropy: bool,
) -> Image<f64> {
    let extent = mask.extent();
    let weights = Axis::ALL.map(|axis| {
        if consider_anisotropy {
            mask.spacing().get(axis).powi(2)
        } else {
            1.0
        }
    });
    let zeros: Vec<[i32; 3]> = extent
        .cells()
        .filter(|&c| mask.get(c).is_some_and(|v| v.is_zero()))
        .collect();

    let data = extent
        .cells()
        .map(|c| {
            zeros
                .iter()
                .map(|z| {
                    (0..3)
                        .map(|a| f64::from(c[a] - z[a]).powi(2) * weights[a])
                        .sum::<f64>()
                })
                .fold(maximum_distance, f64::min)
        })
        .collect();
    Image::from_vec(extent, 1, data)
        .expect("cell_count matches extent")
        .with_spacing(mask.spacing())
}

/// Panic unless both images share an extent and every value agrees to
/// within `tol` (relative to magnitude, absolute near zero).
pub fn assert_close(actual: &Image<f64>, expected: &Image<f64>, tol: f64) {
    assert_eq!(actual.extent(), expected.extent(), "extent mismatch");
    for c in expected.extent().cells() {
        let (a, e) = (actual.get(c), expected.get(c));
        let (Some(a), Some(e)) = (a, e) else {
            panic!("missing value at {c:?}");
        };
        let scale = e.abs().max(1.0);
        assert!(
            (a - e).abs() <= tol * scale,
            "value at {c:?}: got {a}, expected {e}"
        );
    }
}
