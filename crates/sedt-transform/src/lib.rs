//! Separable squared Euclidean distance transform for 3D binary masks.
//!
//! Implements Saito & Toriwaki's algorithm as three 1D passes, one per
//! spatial axis. Pass 0 seeds the field from the mask and runs an exact
//! two-sweep 1D transform along x; passes 1 and 2 fold in y and z with a
//! pruned lower-envelope scan. Every value written is a *squared*
//! distance.
//!
//! # Layers
//!
//! - [`permute`]: reorders extent bounds and strides so each pass scans
//!   along logical axis 0.
//! - [`init`]: mask thresholding (or plain copy) into the f64 field.
//! - [`pass`]: the Direct and Cache-Optimized 1D passes.
//! - [`split`]: region splitting for parallel or streamed execution.
//! - [`filter`]: the three-pass orchestrator, [`EuclideanDistance`].
//!
//! Passes never spawn threads. Rows within a pass are independent; a host
//! may run disjoint [`split`] pieces concurrently as long as pass `k+1`
//! starts only after pass `k` has finished everywhere.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod filter;
pub mod init;
pub mod metrics;
pub mod pass;
pub mod permute;
pub(crate) mod saito;
pub mod scratch;
pub mod split;

pub use config::{Algorithm, ConfigError, EdtConfig};
pub use filter::EuclideanDistance;
pub use metrics::{PassMetrics, RunMetrics};
pub use permute::{AxisPermutation, Traversal};
pub use scratch::PassScratch;
