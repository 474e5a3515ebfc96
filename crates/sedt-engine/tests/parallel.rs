//! Integration test: the parallel scheduler against the serial transform.
//!
//! Whatever the pool size and piece count, the parallel run must write
//! exactly the values of the serial orchestrator.

use proptest::prelude::*;
use sedt_core::{Extent, Image, ScalarImage, Spacing};
use sedt_engine::{EngineConfig, ParallelTransform};
use sedt_test_utils::{brute_force, random_mask, sphere_mask};
use sedt_transform::{Algorithm, EdtConfig};

fn pool(workers: usize, pieces_per_worker: usize, algorithm: Algorithm) -> ParallelTransform {
    ParallelTransform::new(
        EdtConfig {
            maximum_distance: 1e6,
            algorithm,
            ..EdtConfig::default()
        },
        EngineConfig {
            worker_count: Some(workers),
            pieces_per_worker,
        },
    )
    .unwrap()
}

#[test]
fn sphere_matches_reference() {
    let ext = Extent::from_dims([16, 12, 10]).unwrap();
    let mask = sphere_mask(ext, [8, 6, 5], 3).with_spacing(Spacing::new([1.0, 2.0, 3.0]).unwrap());
    let out = pool(4, 2, Algorithm::Direct).compute(&mask).unwrap();
    assert_eq!(out, brute_force(&mask, 1e6, true));
}

#[test]
fn erased_images_run_in_parallel() {
    let ext = Extent::from_dims([8, 8, 8]).unwrap();
    let mask = random_mask(ext, 0.9, 99);
    let expected = pool(1, 1, Algorithm::Direct)
        .transform()
        .compute(&mask)
        .unwrap();

    let input: ScalarImage = mask.into();
    let mut output: ScalarImage = Image::new(ext, 1, 0.0f64).unwrap().into();
    pool(3, 3, Algorithm::CacheOptimized)
        .execute_erased(&input, &mut output)
        .unwrap();
    assert_eq!(output.as_f64(), Some(&expected));
}

#[test]
fn sub_extent_leaves_outside_untouched() {
    let whole = Extent::from_dims([8, 6, 4]).unwrap();
    let inner = Extent::new([2, 1, 1], [6, 4, 3]).unwrap();
    let mask = random_mask(whole, 0.8, 4);
    let par = pool(4, 1, Algorithm::Direct);

    let mut parallel = Image::new(whole, 1, -1.0).unwrap();
    par.execute_extent(&mask, &mut parallel, &inner, &mut |_| {})
        .unwrap();
    let mut serial = Image::new(whole, 1, -1.0).unwrap();
    par.transform()
        .transform_extent(&mask, &mut serial, &inner, &mut |_| {})
        .unwrap();
    assert_eq!(parallel, serial);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn parallel_equals_serial(
        dims in (1usize..=10, 1usize..=10, 1usize..=10),
        workers in 1usize..=6,
        pieces_per_worker in 1usize..=3,
        density in 0.5f64..=1.0,
        seed in any::<u64>(),
        cached in any::<bool>(),
    ) {
        let algorithm = if cached {
            Algorithm::CacheOptimized
        } else {
            Algorithm::Direct
        };
        let ext = Extent::from_dims([dims.0, dims.1, dims.2]).unwrap();
        let mask = random_mask(ext, density, seed);
        let par = pool(workers, pieces_per_worker, algorithm);
        let parallel = par.compute(&mask).unwrap();
        let serial = par.transform().compute(&mask).unwrap();
        prop_assert_eq!(parallel, serial);
    }
}
