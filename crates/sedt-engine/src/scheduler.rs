//! The parallel three-pass scheduler.
//!
//! Every pass opens its own thread scope: the field is borrowed shared
//! while workers run and mutably only after the scope has joined them,
//! which is the barrier between pass `k` and pass `k + 1`.

use std::thread;
use std::time::Instant;

use log::debug;
use sedt_core::{dispatch_scalar, Axis, EdtError, Extent, Image, Scalar, ScalarImage};
use sedt_transform::split::pieces;
use sedt_transform::{EdtConfig, EuclideanDistance, PassMetrics, RunMetrics};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::worker::{worker_loop, PassContext, PieceResult, PieceTask};

/// Runs [`EuclideanDistance`] with each pass spread over worker threads.
#[derive(Clone, Debug)]
pub struct ParallelTransform {
    edt: EuclideanDistance,
    config: EngineConfig,
}

impl ParallelTransform {
    /// Create a scheduler from transform and pool parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] or [`EngineError::InvalidConfig`]
    /// if either set of parameters fails validation.
    pub fn new(edt: EdtConfig, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_transform(EuclideanDistance::new(edt)?, config)
    }

    /// Wrap an existing transform.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `config` is invalid.
    pub fn with_transform(
        edt: EuclideanDistance,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { edt, config })
    }

    /// The wrapped serial transform.
    pub fn transform(&self) -> &EuclideanDistance {
        &self.edt
    }

    /// The pool configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run on type-erased images over the whole output extent.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::OutputNotDouble`] (wrapped) unless `output`
    /// holds `f64`, plus every error of [`execute`](Self::execute).
    pub fn execute_erased(
        &self,
        input: &ScalarImage,
        output: &mut ScalarImage,
    ) -> Result<RunMetrics, EngineError> {
        let found = output.scalar_type();
        let output = output
            .as_f64_mut()
            .ok_or(EdtError::OutputNotDouble { found })?;
        dispatch_scalar!(input, img => self.execute(img, output))
    }

    /// Run over the whole output extent.
    ///
    /// # Errors
    ///
    /// See [`execute_extent`](Self::execute_extent).
    pub fn execute<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &mut Image<f64>,
    ) -> Result<RunMetrics, EngineError> {
        let extent = output.extent();
        self.execute_extent(input, output, &extent, &mut |_| {})
    }

    /// Allocate an f64 output matching the input and run into it.
    ///
    /// # Errors
    ///
    /// See [`execute_extent`](Self::execute_extent).
    pub fn compute<T: Scalar>(&self, input: &Image<T>) -> Result<Image<f64>, EngineError> {
        let mut output = Image::new(input.extent(), 1, 0.0)?.with_spacing(input.spacing());
        self.execute(input, &mut output)?;
        Ok(output)
    }

    /// Run the three passes over `extent`, reporting `(k + 1) / 3` after
    /// pass `k`.
    ///
    /// # Errors
    ///
    /// Shape errors from [`EuclideanDistance::validate`] are returned
    /// before any thread starts. [`EngineError::ThreadSpawnFailed`] and
    /// [`EngineError::WorkerPanicked`] abort the run; the output then
    /// holds the result of the last completed pass.
    pub fn execute_extent<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &mut Image<f64>,
        extent: &Extent,
        progress: &mut dyn FnMut(f64),
    ) -> Result<RunMetrics, EngineError> {
        self.edt.validate(input, output, extent)?;
        let started = Instant::now();
        let mut metrics = RunMetrics::default();
        for axis in Axis::ALL {
            metrics.passes[axis.index()] = self.run_pass(axis, input, output, extent)?;
            progress((axis.index() as f64 + 1.0) / 3.0);
        }
        metrics.total_us = started.elapsed().as_micros() as u64;
        Ok(metrics)
    }

    /// One pass over every piece of `extent`, then paste.
    fn run_pass<T: Scalar>(
        &self,
        axis: Axis,
        input: &Image<T>,
        output: &mut Image<f64>,
        extent: &Extent,
    ) -> Result<PassMetrics, EngineError> {
        let started = Instant::now();
        let pieces = pieces(extent, axis, self.config.requested_pieces());
        let workers = self.config.resolved_worker_count().min(pieces.len());
        debug!(
            "pass {axis}: {} pieces on {workers} workers over {extent}",
            pieces.len()
        );

        let (task_tx, task_rx) = crossbeam_channel::unbounded();
        for (index, extent) in pieces.iter().copied().enumerate() {
            // Receiver is alive; unbounded send cannot fail.
            let _ = task_tx.send(PieceTask { index, extent });
        }
        drop(task_tx);

        let ctx = PassContext {
            edt: &self.edt,
            axis,
            input,
            field: &*output,
        };
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<PieceResult>();

        let mut slots = thread::scope(|s| -> Result<Vec<Option<PieceResult>>, EngineError> {
            let mut handles = Vec::with_capacity(workers);
            for n in 0..workers {
                let (tasks, replies, ctx) = (task_rx.clone(), reply_tx.clone(), &ctx);
                let handle = thread::Builder::new()
                    .name(format!("sedt-worker-{n}"))
                    .spawn_scoped(s, move || worker_loop(ctx, tasks, replies))
                    .map_err(|e| EngineError::ThreadSpawnFailed {
                        reason: format!("sedt-worker-{n}: {e}"),
                    })?;
                handles.push(handle);
            }
            drop(reply_tx);

            let mut slots: Vec<Option<PieceResult>> = Vec::new();
            slots.resize_with(pieces.len(), || None);
            for result in reply_rx.iter() {
                let index = result.index;
                slots[index] = Some(result);
            }

            let panicked: Vec<bool> = handles.into_iter().map(|h| h.join().is_err()).collect();
            if panicked.contains(&true) {
                return Err(EngineError::WorkerPanicked { axis });
            }
            Ok(slots)
        })?;

        let mut computed = Vec::with_capacity(slots.len());
        for slot in slots.drain(..) {
            let result = slot.ok_or(EngineError::WorkerPanicked { axis })?;
            computed.push(result.outcome?);
        }

        let mut metrics = PassMetrics {
            pieces: computed.len(),
            ..PassMetrics::default()
        };
        for (buffer, piece) in &computed {
            output.paste(buffer)?;
            metrics.rows += piece.rows;
        }
        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        debug!(
            "pass {axis} done: {} rows in {}us",
            metrics.rows, metrics.elapsed_us
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedt_core::ScalarType;
    use sedt_transform::Algorithm;

    fn engine(workers: usize, pieces_per_worker: usize) -> ParallelTransform {
        ParallelTransform::new(
            EdtConfig {
                maximum_distance: 1e6,
                ..EdtConfig::default()
            },
            EngineConfig {
                worker_count: Some(workers),
                pieces_per_worker,
            },
        )
        .unwrap()
    }

    fn mask(dims: [usize; 3], zeros: &[[i32; 3]]) -> Image<u8> {
        let mut m = Image::new(Extent::from_dims(dims).unwrap(), 1, 1u8).unwrap();
        for &z in zeros {
            *m.get_mut(z).unwrap() = 0;
        }
        m
    }

    #[test]
    fn rejects_bad_configs() {
        let bad_pool = EngineConfig {
            pieces_per_worker: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            ParallelTransform::new(EdtConfig::default(), bad_pool),
            Err(EngineError::InvalidConfig { .. })
        ));
        let bad_edt = EdtConfig {
            maximum_distance: f64::NAN,
            ..EdtConfig::default()
        };
        assert!(matches!(
            ParallelTransform::new(bad_edt, EngineConfig::default()),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn matches_serial_single_zero() {
        let m = mask([6, 5, 4], &[[1, 3, 2]]);
        let par = engine(4, 2);
        assert_eq!(
            par.compute(&m).unwrap(),
            par.transform().compute(&m).unwrap()
        );
    }

    #[test]
    fn more_workers_than_rows() {
        let m = mask([3, 1, 1], &[[0, 0, 0]]);
        let out = engine(16, 4).compute(&m).unwrap();
        assert_eq!(out.data(), &[0.0, 1.0, 4.0]);
    }

    #[test]
    fn metrics_report_pieces_and_rows() {
        let m = mask([4, 4, 4], &[[0, 0, 0]]);
        let mut out = Image::new(m.extent(), 1, 0.0).unwrap();
        let metrics = engine(2, 2).execute(&m, &mut out).unwrap();
        for axis in Axis::ALL {
            assert_eq!(metrics.pass(axis).rows, 16, "{axis}");
            assert_eq!(metrics.pass(axis).pieces, 4, "{axis}");
        }
    }

    #[test]
    fn progress_per_pass() {
        let m = mask([3, 3, 3], &[[1, 1, 1]]);
        let mut out = Image::new(m.extent(), 1, 0.0).unwrap();
        let mut seen = Vec::new();
        let ext = m.extent();
        engine(2, 1)
            .execute_extent(&m, &mut out, &ext, &mut |p| seen.push(p))
            .unwrap();
        assert_eq!(seen, vec![1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn cached_variant_in_parallel() {
        let m = mask([5, 5, 5], &[[0, 0, 0], [4, 4, 4]]);
        let par = ParallelTransform::new(
            EdtConfig {
                maximum_distance: 1e6,
                algorithm: Algorithm::CacheOptimized,
                ..EdtConfig::default()
            },
            EngineConfig {
                worker_count: Some(3),
                pieces_per_worker: 1,
            },
        )
        .unwrap();
        let serial = engine(1, 1).transform().compute(&m).unwrap();
        assert_eq!(par.compute(&m).unwrap(), serial);
    }

    #[test]
    fn erased_rejects_non_double_output() {
        let m: ScalarImage = mask([2, 2, 1], &[[0, 0, 0]]).into();
        let mut out: ScalarImage = Image::new(m.extent(), 1, 0i32).unwrap().into();
        assert_eq!(
            engine(2, 1).execute_erased(&m, &mut out),
            Err(EngineError::Transform(EdtError::OutputNotDouble {
                found: ScalarType::I32
            }))
        );
    }

    #[test]
    fn shape_errors_before_threads() {
        let m = mask([2, 2, 1], &[[0, 0, 0]]);
        let mut out = Image::new(m.extent(), 3, 0.0).unwrap();
        assert_eq!(
            engine(2, 1).execute(&m, &mut out),
            Err(EngineError::Transform(EdtError::OutputComponents {
                found: 3
            }))
        );
    }
}
