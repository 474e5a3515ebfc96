//! The three-pass orchestrator.
//!
//! [`EuclideanDistance`] validates the images, seeds the output from the
//! mask, then runs the x, y, and z passes in order on the output buffer.
//! Each pass consumes the previous pass's output in place, so there is
//! nothing to copy between passes. Progress `(k + 1) / 3` is reported
//! after pass `k`.

use std::time::Instant;

use log::debug;
use sedt_core::{dispatch_scalar, Axis, EdtError, Extent, Image, Scalar, ScalarImage};

use crate::config::{ConfigError, EdtConfig};
use crate::init::{copy_data, initialize_mask};
use crate::metrics::{PassMetrics, RunMetrics};
use crate::pass::distance_pass;
use crate::scratch::PassScratch;

/// Squared Euclidean distance transform of a 3D mask.
#[derive(Clone, Debug, Default)]
pub struct EuclideanDistance {
    config: EdtConfig,
}

impl EuclideanDistance {
    /// Create a transform from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`EdtConfig::validate`].
    pub fn new(config: EdtConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The parameters this transform runs with.
    pub fn config(&self) -> &EdtConfig {
        &self.config
    }

    /// Run on type-erased images over the whole output extent.
    ///
    /// # Errors
    ///
    /// See [`execute_with_progress`](Self::execute_with_progress).
    pub fn execute(
        &self,
        input: &ScalarImage,
        output: &mut ScalarImage,
    ) -> Result<RunMetrics, EdtError> {
        self.execute_with_progress(input, output, &mut |_| {})
    }

    /// Run on type-erased images, reporting progress after every pass.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::OutputNotDouble`] unless `output` holds `f64`,
    /// plus every error of [`transform`](Self::transform). The output is
    /// untouched on error.
    pub fn execute_with_progress(
        &self,
        input: &ScalarImage,
        output: &mut ScalarImage,
        progress: &mut dyn FnMut(f64),
    ) -> Result<RunMetrics, EdtError> {
        let found = output.scalar_type();
        let output = output
            .as_f64_mut()
            .ok_or(EdtError::OutputNotDouble { found })?;
        dispatch_scalar!(input, img => self.transform(img, output, progress))
    }

    /// Run over the whole output extent.
    ///
    /// # Errors
    ///
    /// See [`transform_extent`](Self::transform_extent).
    pub fn transform<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &mut Image<f64>,
        progress: &mut dyn FnMut(f64),
    ) -> Result<RunMetrics, EdtError> {
        let extent = output.extent();
        self.transform_extent(input, output, &extent, progress)
    }

    /// Run the full transform over `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::OutputComponents`] if `output` has more than
    /// one component, or [`EdtError::ExtentOutOfBounds`] if either image
    /// does not cover `extent`. Validation happens before any write.
    pub fn transform_extent<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &mut Image<f64>,
        extent: &Extent,
        progress: &mut dyn FnMut(f64),
    ) -> Result<RunMetrics, EdtError> {
        self.validate(input, output, extent)?;
        debug!("euclidean distance over {extent}");

        let started = Instant::now();
        let mut metrics = RunMetrics::default();

        let t = Instant::now();
        self.initialize(input, output, extent)?;
        metrics.initialize_us = t.elapsed().as_micros() as u64;

        let mut scratch = PassScratch::new();
        for axis in Axis::ALL {
            metrics.passes[axis.index()] = self.pass(axis, output, extent, &mut scratch)?;
            progress((axis.index() as f64 + 1.0) / 3.0);
        }

        metrics.total_us = started.elapsed().as_micros() as u64;
        Ok(metrics)
    }

    /// Allocate an f64 output over the input's extent and spacing, then
    /// run the full transform into it.
    ///
    /// # Errors
    ///
    /// See [`transform_extent`](Self::transform_extent).
    pub fn compute<T: Scalar>(&self, input: &Image<T>) -> Result<Image<f64>, EdtError> {
        let mut output = Image::new(input.extent(), 1, 0.0)?.with_spacing(input.spacing());
        self.transform(input, &mut output, &mut |_| {})?;
        Ok(output)
    }

    /// Check image shapes against `extent` without touching any data.
    ///
    /// # Errors
    ///
    /// As [`transform_extent`](Self::transform_extent).
    pub fn validate<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &Image<f64>,
        extent: &Extent,
    ) -> Result<(), EdtError> {
        if output.components() != 1 {
            return Err(EdtError::OutputComponents {
                found: output.components(),
            });
        }
        input.require_contains(extent)?;
        output.require_contains(extent)
    }

    /// Seed `output` over `extent`: threshold the mask when
    /// `initialize` is on, otherwise copy the input verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] if either image does not
    /// cover `extent`.
    pub fn initialize<T: Scalar>(
        &self,
        input: &Image<T>,
        output: &mut Image<f64>,
        extent: &Extent,
    ) -> Result<(), EdtError> {
        if self.config.initialize {
            initialize_mask(input, output, extent, self.config.maximum_distance)
        } else {
            copy_data(input, output, extent)
        }
    }

    /// Run the single pass along `axis` over `extent`, in place.
    ///
    /// Pass x expects a seeded field; passes y and z expect the output of
    /// the pass before them over every row they touch.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] if `field` does not cover
    /// `extent`.
    pub fn pass(
        &self,
        axis: Axis,
        field: &mut Image<f64>,
        extent: &Extent,
        scratch: &mut PassScratch,
    ) -> Result<PassMetrics, EdtError> {
        debug!("pass {axis} ({}) over {extent}", self.config.algorithm);
        let t = Instant::now();
        let rows = distance_pass(&self.config, axis, field, extent, scratch)?;
        let metrics = PassMetrics {
            elapsed_us: t.elapsed().as_micros() as u64,
            rows,
            pieces: 1,
        };
        debug!("pass {axis} done: {rows} rows in {}us", metrics.elapsed_us);
        Ok(metrics)
    }
}
