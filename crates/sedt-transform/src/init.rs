//! Mask initializer: builds the seed field for pass 0.
//!
//! With initialization on, every mask cell that is exactly zero becomes
//! `0.0` and every other cell becomes `maximum_distance`. With it off,
//! the input is copied verbatim (widened to f64), which resumes from a
//! field that already holds squared distances.
//!
//! Only component 0 of a multi-component input is read.

use sedt_core::{Axis, EdtError, Extent, Image, Scalar};

use crate::permute::{AxisPermutation, Traversal};

/// Threshold `input` into `output` over `extent`.
///
/// # Errors
///
/// Returns [`EdtError::ExtentOutOfBounds`] if either image does not
/// cover `extent`. Nothing is written on error.
pub fn initialize_mask<T: Scalar>(
    input: &Image<T>,
    output: &mut Image<f64>,
    extent: &Extent,
    maximum_distance: f64,
) -> Result<(), EdtError> {
    fill(input, output, extent, |v: T| {
        if v.is_zero() {
            0.0
        } else {
            maximum_distance
        }
    })
}

/// Copy `input` into `output` over `extent` with no thresholding.
///
/// # Errors
///
/// Returns [`EdtError::ExtentOutOfBounds`] if either image does not
/// cover `extent`. Nothing is written on error.
pub fn copy_data<T: Scalar>(
    input: &Image<T>,
    output: &mut Image<f64>,
    extent: &Extent,
) -> Result<(), EdtError> {
    fill(input, output, extent, T::to_f64)
}

fn fill<T: Scalar>(
    input: &Image<T>,
    output: &mut Image<f64>,
    extent: &Extent,
    map: impl Fn(T) -> f64,
) -> Result<(), EdtError> {
    let perm = AxisPermutation::for_axis(Axis::X);
    let src = Traversal::new(&perm, input, extent)?;
    let dst = Traversal::new(&perm, output, extent)?;

    let in_data = input.data();
    let out_data = output.data_mut();
    let row_len = dst.len[0];
    for (in_row, out_row) in src.row_starts().zip(dst.row_starts()) {
        for i in 0..row_len {
            out_data[out_row + i * dst.inc[0]] = map(in_data[in_row + i * src.inc[0]]);
        }
    }
    Ok(())
}
