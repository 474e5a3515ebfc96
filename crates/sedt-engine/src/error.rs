//! Scheduler errors.

use std::error::Error;
use std::fmt;

use sedt_core::{Axis, EdtError};
use sedt_transform::ConfigError;

/// Errors from [`ParallelTransform`](crate::ParallelTransform).
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// A pass or image operation failed.
    Transform(EdtError),
    /// The transform parameters are invalid.
    Config(ConfigError),
    /// The pool configuration is invalid.
    InvalidConfig {
        /// Which setting is wrong.
        reason: String,
    },
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error text.
        reason: String,
    },
    /// A worker panicked, or a piece produced no result, during a pass.
    WorkerPanicked {
        /// The pass that was running.
        axis: Axis,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(e) => write!(f, "transform: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid engine config: {reason}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkerPanicked { axis } => {
                write!(f, "worker panicked during pass {axis}")
            }
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transform(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EdtError> for EngineError {
    fn from(e: EdtError) -> Self {
        Self::Transform(e)
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
