//! sedt: separable squared Euclidean distance transform for 3D masks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sedt sub-crates. For most users, adding `sedt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sedt::prelude::*;
//!
//! // A 5x1x1 row with background at both ends.
//! let extent = Extent::from_dims([5, 1, 1]).unwrap();
//! let mask = Image::from_vec(extent, 1, vec![0u8, 1, 1, 1, 0]).unwrap();
//!
//! let edt = EuclideanDistance::new(EdtConfig {
//!     maximum_distance: 100.0,
//!     ..EdtConfig::default()
//! })
//! .unwrap();
//! let squared = edt.compute(&mask).unwrap();
//! assert_eq!(squared.data(), &[0.0, 1.0, 4.0, 1.0, 0.0]);
//!
//! // The same run spread over worker threads.
//! let parallel = ParallelTransform::with_transform(edt, EngineConfig::default()).unwrap();
//! assert_eq!(parallel.compute(&mask).unwrap(), squared);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sedt-core` | Axis, extent, spacing, scalar types, images, errors |
//! | [`transform`] | `sedt-transform` | Passes, region splitter, config, orchestrator |
//! | [`engine`] | `sedt-engine` | Parallel host scheduler |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, extent, and scalar types (`sedt-core`).
///
/// Images are owned, strided, and may start at non-zero coordinates;
/// [`types::ScalarImage`] erases the element type.
pub use sedt_core as types;

/// The distance passes and their orchestrator (`sedt-transform`).
///
/// [`transform::EuclideanDistance`] runs the three passes serially;
/// [`transform::split`] cuts an extent into pieces for a host scheduler.
pub use sedt_transform as transform;

/// Parallel scheduling (`sedt-engine`).
pub use sedt_engine as engine;

/// Common imports for typical sedt usage.
pub mod prelude {
    // Core types
    pub use sedt_core::{Axis, Extent, Image, Scalar, ScalarImage, ScalarType, Spacing};

    // Errors
    pub use sedt_core::EdtError;
    pub use sedt_engine::EngineError;
    pub use sedt_transform::ConfigError;

    // Transform
    pub use sedt_transform::{Algorithm, EdtConfig, EuclideanDistance, RunMetrics};

    // Engine
    pub use sedt_engine::{EngineConfig, ParallelTransform};
}
