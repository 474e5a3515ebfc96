//! Core types for the sedt squared Euclidean distance transform.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model every other sedt crate works against: spatial axes,
//! inclusive extents, voxel spacing, the supported mask scalar types,
//! owned strided image storage, and the execution error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod extent;
pub mod image;
pub mod scalar;
pub mod spacing;

pub use axis::Axis;
pub use error::EdtError;
pub use extent::Extent;
pub use image::{Image, ScalarImage};
pub use scalar::{Scalar, ScalarType};
pub use spacing::Spacing;
