//! Per-pass scratch arena.
//!
//! One [`PassScratch`] is prepared at the start of a pass and reused for
//! every row, so the row loops never allocate. It is never shared:
//! concurrent workers each own one.

/// Scratch buffers for one pass: the squared-offset table and two row
/// buffers.
#[derive(Clone, Debug, Default)]
pub struct PassScratch {
    /// `sq[k] = k² · unit` for `k <= row_len`, then `maximum_distance`
    /// up to index `2 · row_len + 1`.
    pub(crate) sq: Vec<f64>,
    /// Read-only snapshot of the current row.
    pub(crate) buff: Vec<f64>,
    /// Contiguous write target for the cache-optimized pass.
    pub(crate) temp: Vec<f64>,
}

impl PassScratch {
    /// Empty scratch; buffers grow on the first [`prepare`](Self::prepare).
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the buffers for rows of `row_len` cells and rebuild the
    /// squared-offset table.
    ///
    /// `unit` is the squared spacing of the active axis (1 when
    /// anisotropy is ignored). Capacity is kept across calls.
    pub fn prepare(&mut self, row_len: usize, unit: f64, maximum_distance: f64) {
        self.sq.clear();
        self.sq
            .extend((0..=row_len).map(|k| (k * k) as f64 * unit));
        self.sq.resize(2 * row_len + 2, maximum_distance);

        self.buff.clear();
        self.buff.resize(row_len, 0.0);
        self.temp.clear();
        self.temp.resize(row_len, 0.0);
    }

    /// The squared-offset table from the last `prepare`.
    pub fn squared_offsets(&self) -> &[f64] {
        &self.sq
    }

    /// Row length from the last `prepare`.
    pub fn row_len(&self) -> usize {
        self.buff.len()
    }
}
