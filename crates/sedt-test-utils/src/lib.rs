//! Test utilities for sedt development.
//!
//! Provides deterministic mask generators ([`random_mask`],
//! [`sphere_mask`], [`single_zero`]) and an O(n²) reference transform,
//! [`brute_force`], that the separable passes are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reference;

pub use reference::{assert_close, brute_force};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sedt_core::{Extent, Image};

/// A u8 mask over `extent` where each cell is foreground (1) with
/// probability `density`. Same seed, same mask.
pub fn random_mask(extent: Extent, density: f64, seed: u64) -> Image<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..extent.cell_count())
        .map(|_| u8::from(unit_f64(&mut rng) < density))
        .collect();
    Image::from_vec(extent, 1, data).expect("cell_count matches extent")
}

/// Foreground everywhere except a ball of background around `centre`.
pub fn sphere_mask(extent: Extent, centre: [i32; 3], radius: i32) -> Image<u8> {
    let r2 = radius * radius;
    let data = extent
        .cells()
        .map(|c| {
            let d2: i32 = (0..3).map(|a| (c[a] - centre[a]).pow(2)).sum();
            u8::from(d2 > r2)
        })
        .collect();
    Image::from_vec(extent, 1, data).expect("cell_count matches extent")
}

/// Foreground everywhere except one cell.
pub fn single_zero(extent: Extent, at: [i32; 3]) -> Image<u8> {
    let mut mask = Image::new(extent, 1, 1u8).expect("single-component image");
    if let Some(v) = mask.get_mut(at) {
        *v = 0;
    }
    mask
}

/// Uniform sample in `[0, 1)` from the top 53 bits.
fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
