//! Benchmark profiles for the sedt distance transform.
//!
//! - [`reference_profile`]: 64³ random mask (262K cells), sparse background
//! - [`stress_profile`]: 128³ random mask (~2M cells)
//! - [`sphere_profile`]: 96³ mask with one spherical background region
//!
//! Masks are deterministic per seed so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sedt_core::{Extent, Image};
use sedt_test_utils::{random_mask, sphere_mask};
use sedt_transform::{Algorithm, EdtConfig};

/// Foreground density of the random profiles.
pub const FOREGROUND_DENSITY: f64 = 0.98;

/// 64x64x64 random mask.
pub fn reference_profile(seed: u64) -> Image<u8> {
    random_mask(cube(64), FOREGROUND_DENSITY, seed)
}

/// 128x128x128 random mask.
pub fn stress_profile(seed: u64) -> Image<u8> {
    random_mask(cube(128), FOREGROUND_DENSITY, seed)
}

/// 96x96x96 mask, background inside a radius-16 ball at the centre.
pub fn sphere_profile() -> Image<u8> {
    sphere_mask(cube(96), [48, 48, 48], 16)
}

/// Transform parameters used by every benchmark.
pub fn bench_config(algorithm: Algorithm) -> EdtConfig {
    EdtConfig {
        algorithm,
        ..EdtConfig::default()
    }
}

fn cube(n: usize) -> Extent {
    Extent::from_dims([n, n, n]).expect("profile dims are non-zero")
}
