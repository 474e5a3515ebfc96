//! Per-pass worker loop.
//!
//! Each worker receives piece extents over a crossbeam channel, computes
//! the pass for that piece on a buffer it owns, and sends the buffer back
//! on the reply channel. The scheduler pastes the buffers once every
//! worker has exited, so the shared field is only ever read here.

use crossbeam_channel::{Receiver, Sender};
use log::trace;
use sedt_core::{Axis, EdtError, Extent, Image, Scalar};
use sedt_transform::{EuclideanDistance, PassMetrics, PassScratch};

/// Read-only state shared by every worker of one pass.
pub(crate) struct PassContext<'a, T> {
    pub(crate) edt: &'a EuclideanDistance,
    pub(crate) axis: Axis,
    pub(crate) input: &'a Image<T>,
    pub(crate) field: &'a Image<f64>,
}

/// A piece to compute, tagged with its position in the split.
pub(crate) struct PieceTask {
    pub(crate) index: usize,
    pub(crate) extent: Extent,
}

/// A computed piece, ready to paste.
pub(crate) struct PieceResult {
    pub(crate) index: usize,
    pub(crate) outcome: Result<(Image<f64>, PassMetrics), EdtError>,
}

/// Main loop for a worker thread. Runs until the task channel is drained
/// and closed, or the reply channel is gone.
pub(crate) fn worker_loop<T: Scalar>(
    ctx: &PassContext<'_, T>,
    tasks: Receiver<PieceTask>,
    replies: Sender<PieceResult>,
) {
    let mut scratch = PassScratch::new();
    while let Ok(task) = tasks.recv() {
        trace!("pass {} piece {} at {}", ctx.axis, task.index, task.extent);
        let outcome = run_piece(ctx, &task.extent, &mut scratch);
        let result = PieceResult {
            index: task.index,
            outcome,
        };
        if replies.send(result).is_err() {
            break;
        }
    }
}

/// Compute one piece. Pass x seeds a fresh buffer from the mask; later
/// passes crop the field left by the previous pass.
fn run_piece<T: Scalar>(
    ctx: &PassContext<'_, T>,
    piece: &Extent,
    scratch: &mut PassScratch,
) -> Result<(Image<f64>, PassMetrics), EdtError> {
    let mut buffer = match ctx.axis {
        Axis::X => {
            let mut seeded = Image::new(*piece, 1, 0.0)?.with_spacing(ctx.field.spacing());
            ctx.edt.initialize(ctx.input, &mut seeded, piece)?;
            seeded
        }
        Axis::Y | Axis::Z => ctx.field.crop(piece)?,
    };
    let metrics = ctx.edt.pass(ctx.axis, &mut buffer, piece, scratch)?;
    Ok((buffer, metrics))
}
