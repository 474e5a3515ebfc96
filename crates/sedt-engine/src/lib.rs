//! Parallel host scheduler for the sedt distance transform.
//!
//! [`ParallelTransform`] runs each of the three passes over Region
//! Splitter pieces on a pool of scoped worker threads. Workers crop their
//! piece out of the shared read-only field, compute on their own buffer,
//! and hand it back over a reply channel; the scheduler pastes every
//! piece before the next pass starts. Results are bit-identical to the
//! serial [`EuclideanDistance`](sedt_transform::EuclideanDistance).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod scheduler;
pub(crate) mod worker;

pub use config::EngineConfig;
pub use error::EngineError;
pub use scheduler::ParallelTransform;
