//! Row kernels of Saito & Toriwaki's squared EDT.
//!
//! T. Saito and J.I. Toriwaki. New algorithms for Euclidean distance
//! transformations of an n-dimensional digitised picture with
//! applications. Pattern Recognition, 27(11), pp. 1551-1565, 1994.
//!
//! Both kernels are generic over [`RowTarget`] so the strided and
//! contiguous passes share one body and stay bit-identical.

/// Where a kernel writes its results.
pub(crate) trait RowTarget {
    fn get(&self, i: usize) -> f64;
    fn set(&mut self, i: usize, value: f64);
}

/// A row read and written in place through the grid's stride.
pub(crate) struct StridedRow<'a> {
    pub data: &'a mut [f64],
    pub start: usize,
    pub stride: usize,
}

impl RowTarget for StridedRow<'_> {
    #[inline]
    fn get(&self, i: usize) -> f64 {
        self.data[self.start + i * self.stride]
    }

    #[inline]
    fn set(&mut self, i: usize, value: f64) {
        self.data[self.start + i * self.stride] = value;
    }
}

impl RowTarget for [f64] {
    #[inline]
    fn get(&self, i: usize) -> f64 {
        self[i]
    }

    #[inline]
    fn set(&mut self, i: usize, value: f64) {
        self[i] = value;
    }
}

/// Exact 1D transform of a seed row (pass 0).
///
/// `df` counts cells since the last zero. It starts at `len` so a run
/// of foreground before the first zero indexes the sentinel tail of
/// `sq` and is left at its seed value. `sq` must hold `2 * len + 2`
/// entries.
pub(crate) fn seed_row<R: RowTarget + ?Sized>(row: &mut R, len: usize, sq: &[f64]) {
    let mut df = len;
    for i in 0..len {
        relax_seed(row, i, &mut df, sq);
    }
    df = len;
    for i in (0..len).rev() {
        relax_seed(row, i, &mut df, sq);
    }
}

#[inline]
fn relax_seed<R: RowTarget + ?Sized>(row: &mut R, i: usize, df: &mut usize, sq: &[f64]) {
    let v = row.get(i);
    if v != 0.0 {
        *df += 1;
        if sq[*df] < v {
            row.set(i, sq[*df]);
        }
    } else {
        *df = 0;
    }
}

/// Lower-envelope update of an already distance-valued row (passes 1, 2).
///
/// `buff` is a read-only snapshot of the row; improvements are written
/// to `row`. `unit` is the squared spacing, equal to `sq[1]`.
pub(crate) fn envelope_row<R: RowTarget + ?Sized>(
    buff: &[f64],
    row: &mut R,
    sq: &[f64],
    unit: f64,
) {
    let len = buff.len();
    if len < 2 {
        return;
    }

    // Forward: propagate from cell i-1 into i, i+1, ...
    let mut a = 0usize;
    let mut buffer = buff[0];
    for i in 1..len {
        a = a.saturating_sub(1);
        if buff[i] > buffer + sq[1] {
            let b = reach(buff[i] - buffer, unit).min(len - 1 - i);
            for n in a..=b {
                let m = buffer + sq[n + 1];
                if buff[i + n] <= m {
                    break;
                }
                if m < row.get(i + n) {
                    row.set(i + n, m);
                }
            }
            a = b;
        } else {
            a = 0;
        }
        buffer = buff[i];
    }

    // Backward: propagate from cell i+1 into i, i-1, ...
    a = 0;
    buffer = buff[len - 1];
    for i in (0..len - 1).rev() {
        a = a.saturating_sub(1);
        if buff[i] > buffer + sq[1] {
            let b = reach(buff[i] - buffer, unit).min(i);
            for n in a..=b {
                let m = buffer + sq[n + 1];
                if buff[i - n] <= m {
                    break;
                }
                if m < row.get(i - n) {
                    row.set(i - n, m);
                }
            }
            a = b;
        } else {
            a = 0;
        }
        buffer = buff[i];
    }
}

/// Last offset at which the lower neighbour's parabola can still beat
/// the current cell's own: `floor(((diff / unit) - 1) / 2)`.
#[inline]
fn reach(diff: f64, unit: f64) -> usize {
    // Saturating float-to-int cast; the caller clips to the row.
    (((diff / unit) - 1.0) / 2.0).floor() as usize
}
