//! Worker pool configuration.

use crate::error::EngineError;

/// Upper bound on resolved worker threads.
pub const MAX_WORKERS: usize = 64;

/// Sizing of the per-pass worker pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker thread count. `None` uses the available parallelism.
    /// Explicit values are clamped to `[1, 64]`.
    pub worker_count: Option<usize>,
    /// Pieces requested per worker for each pass. Values above 1 help
    /// balance load when rows differ in cost. Must be at least 1.
    pub pieces_per_worker: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            pieces_per_worker: 1,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `pieces_per_worker` is 0.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.pieces_per_worker == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "pieces_per_worker must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Resolve the effective worker count.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, MAX_WORKERS),
        }
    }

    /// Pieces to request from the splitter for one pass.
    pub fn requested_pieces(&self) -> usize {
        self.resolved_worker_count()
            .saturating_mul(self.pieces_per_worker.max(1))
    }
}
