//! Integration test: separable passes against the brute-force reference.
//!
//! Every mask here is small enough for the O(n²) reference. Integer
//! spacings keep all squared distances exactly representable, so most
//! comparisons are exact; fractional spacings use a relative tolerance.

use proptest::prelude::*;
use sedt_core::{Axis, Extent, Image, Spacing};
use sedt_test_utils::{assert_close, brute_force, random_mask, single_zero, sphere_mask};
use sedt_transform::{Algorithm, EdtConfig, EuclideanDistance, PassScratch};

fn edt(
    algorithm: Algorithm,
    maximum_distance: f64,
    consider_anisotropy: bool,
) -> EuclideanDistance {
    EuclideanDistance::new(EdtConfig {
        maximum_distance,
        consider_anisotropy,
        algorithm,
        ..EdtConfig::default()
    })
    .unwrap()
}

// ── Fixed scenarios ──────────────────────────────────────────────────

#[test]
fn single_zero_matches_reference() {
    let ext = Extent::from_dims([7, 6, 5]).unwrap();
    let mask = single_zero(ext, [2, 4, 1]);
    let expected = brute_force(&mask, 1e6, true);
    for algorithm in [Algorithm::Direct, Algorithm::CacheOptimized] {
        let out = edt(algorithm, 1e6, true).compute(&mask).unwrap();
        assert_eq!(out, expected, "{algorithm}");
    }
}

#[test]
fn sphere_matches_reference() {
    let ext = Extent::from_dims([11, 9, 10]).unwrap();
    let mask = sphere_mask(ext, [5, 4, 5], 2);
    let expected = brute_force(&mask, 1e6, true);
    let out = edt(Algorithm::Direct, 1e6, true).compute(&mask).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn anisotropic_x_quadruples_distances() {
    let ext = Extent::from_dims([6, 1, 1]).unwrap();
    let mask = single_zero(ext, [0, 0, 0]).with_spacing(Spacing::new([2.0, 1.0, 1.0]).unwrap());
    let out = edt(Algorithm::Direct, 1e6, true).compute(&mask).unwrap();
    let expected: Vec<f64> = (0..6).map(|k| f64::from(k * k) * 4.0).collect();
    assert_eq!(out.data(), expected.as_slice());
}

#[test]
fn anisotropy_ignored_when_disabled() {
    let ext = Extent::from_dims([5, 4, 3]).unwrap();
    let mask = random_mask(ext, 0.8, 11).with_spacing(Spacing::new([3.0, 0.5, 2.0]).unwrap());
    let out = edt(Algorithm::CacheOptimized, 1e6, false)
        .compute(&mask)
        .unwrap();
    assert_eq!(out, brute_force(&mask, 1e6, false));
}

#[test]
fn fractional_spacing_within_tolerance() {
    let ext = Extent::from_dims([8, 7, 6]).unwrap();
    let mask = random_mask(ext, 0.9, 3).with_spacing(Spacing::new([0.7, 1.3, 2.1]).unwrap());
    let out = edt(Algorithm::Direct, 1e6, true).compute(&mask).unwrap();
    assert_close(&out, &brute_force(&mask, 1e6, true), 1e-9);
}

#[test]
fn clamped_maximum_distance() {
    let ext = Extent::from_dims([9, 9, 1]).unwrap();
    let mask = single_zero(ext, [0, 0, 0]);
    let out = edt(Algorithm::Direct, 10.0, true).compute(&mask).unwrap();
    assert_eq!(out, brute_force(&mask, 10.0, true));
    assert!(out.data().iter().all(|&v| v <= 10.0));
}

#[test]
fn offset_extent_matches_reference() {
    let ext = Extent::new([-3, 2, -1], [2, 6, 1]).unwrap();
    let mask = random_mask(ext, 0.85, 21);
    let out = edt(Algorithm::CacheOptimized, 1e6, true)
        .compute(&mask)
        .unwrap();
    assert_eq!(out.extent(), ext);
    assert_eq!(out, brute_force(&mask, 1e6, true));
}

#[test]
fn sub_extent_leaves_outside_untouched() {
    let whole = Extent::from_dims([6, 6, 3]).unwrap();
    let inner = Extent::new([1, 1, 0], [4, 4, 2]).unwrap();
    let mask = random_mask(whole, 0.7, 5);
    let mut out = Image::new(whole, 1, -1.0).unwrap();
    edt(Algorithm::Direct, 1e6, true)
        .transform_extent(&mask, &mut out, &inner, &mut |_| {})
        .unwrap();

    let expected = brute_force(&mask.crop(&inner).unwrap(), 1e6, true);
    for c in whole.cells() {
        if inner.contains_coord(c) {
            assert_eq!(out.get(c), expected.get(c), "inside at {c:?}");
        } else {
            assert_eq!(out.get(c), Some(-1.0), "outside at {c:?}");
        }
    }
}

// ── Properties ───────────────────────────────────────────────────────

fn dims() -> impl Strategy<Value = [usize; 3]> {
    (1usize..=7, 1usize..=7, 1usize..=5).prop_map(|(x, y, z)| [x, y, z])
}

fn integer_spacing() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(1u8..=3).prop_map(|s| s.map(f64::from))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matches_brute_force(
        dims in dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
        spacing in integer_spacing(),
    ) {
        let ext = Extent::from_dims(dims).unwrap();
        let mask = random_mask(ext, density, seed).with_spacing(Spacing::new(spacing).unwrap());
        let out = edt(Algorithm::Direct, 1e6, true).compute(&mask).unwrap();
        prop_assert_eq!(out, brute_force(&mask, 1e6, true));
    }

    #[test]
    fn direct_and_cached_are_bit_identical(
        dims in dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
        spacing in prop::array::uniform3(0.25f64..4.0),
        max in 1.0f64..200.0,
    ) {
        let ext = Extent::from_dims(dims).unwrap();
        let mask = random_mask(ext, density, seed).with_spacing(Spacing::new(spacing).unwrap());
        let direct = edt(Algorithm::Direct, max, true).compute(&mask).unwrap();
        let cached = edt(Algorithm::CacheOptimized, max, true)
            .compute(&mask)
            .unwrap();
        for (d, c) in direct.data().iter().zip(cached.data()) {
            prop_assert_eq!(d.to_bits(), c.to_bits());
        }
    }

    #[test]
    fn zero_cells_stay_zero_and_output_is_bounded(
        dims in dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
        max in 0.0f64..50.0,
    ) {
        let ext = Extent::from_dims(dims).unwrap();
        let mask = random_mask(ext, density, seed);
        let out = edt(Algorithm::Direct, max, true).compute(&mask).unwrap();
        for c in ext.cells() {
            let v = out.get(c).unwrap();
            prop_assert!(v >= 0.0 && v <= max);
            if mask.get(c) == Some(0) {
                prop_assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn seed_pass_leaves_finished_field_unchanged(
        dims in dims(),
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
        cached in any::<bool>(),
    ) {
        let algorithm = if cached {
            Algorithm::CacheOptimized
        } else {
            Algorithm::Direct
        };
        let ext = Extent::from_dims(dims).unwrap();
        let mask = random_mask(ext, density, seed);
        let done = edt(algorithm, 1e6, true).compute(&mask).unwrap();

        let resume = EuclideanDistance::new(EdtConfig {
            maximum_distance: 1e6,
            initialize: false,
            algorithm,
            ..EdtConfig::default()
        })
        .unwrap();
        let mut field = Image::new(ext, 1, 0.0).unwrap();
        resume.initialize(&done, &mut field, &ext).unwrap();
        resume
            .pass(Axis::X, &mut field, &ext, &mut PassScratch::new())
            .unwrap();
        prop_assert_eq!(field, done);
    }
}
