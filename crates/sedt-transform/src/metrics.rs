//! Per-pass timing metrics.
//!
//! [`RunMetrics`] is returned by every full transform so hosts can log
//! or profile pass costs without instrumenting the kernel.

use sedt_core::Axis;

/// Timing for a single pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Wall-clock time for the pass, in microseconds.
    pub elapsed_us: u64,
    /// Rows scanned along the active axis.
    pub rows: usize,
    /// Pieces the pass was split into (1 when run serially).
    pub pieces: usize,
}

/// Timing for a full three-pass run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Wall-clock time for all passes, in microseconds.
    pub total_us: u64,
    /// Time spent seeding the field from the mask, in microseconds.
    pub initialize_us: u64,
    /// One entry per pass, indexed by [`Axis::index`].
    pub passes: [PassMetrics; 3],
}

impl RunMetrics {
    /// Metrics of the pass along `axis`.
    pub fn pass(&self, axis: Axis) -> &PassMetrics {
        &self.passes[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.initialize_us, 0);
        for axis in Axis::ALL {
            assert_eq!(m.pass(axis), &PassMetrics::default());
        }
    }
}
