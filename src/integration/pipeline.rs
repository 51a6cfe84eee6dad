//! TrackerPipeline for combining detection with tracking.

use std::time::Instant;

use crate::tracker::{BallTracker, ConfigError, TrackerConfig, TrackingState};

use super::{DetectionSource, IntoDetection};

/// A combined tracker that bundles a ball detector with a `BallTracker`.
///
/// Owns both halves explicitly; whatever runs the acquisition loop owns the
/// pipeline and calls `process_frame` once per captured frame.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: BallTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            detector,
            tracker: BallTracker::new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Result<Self, ConfigError> {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame captured at `now` and return the tracking state.
    ///
    /// An empty frame is invalid: the detector is not called and the state
    /// becomes `Error`. A detector failure also marks the frame invalid before
    /// the error is returned.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `now` - Capture time of the frame
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        now: Instant,
    ) -> Result<TrackingState, D::Error> {
        if input.is_empty() || width == 0 || height == 0 {
            log::warn!("empty frame ({}x{}), skipping detection", width, height);
            return Ok(self.tracker.reject_frame());
        }

        match self.detector.detect(input, width, height) {
            Ok(output) => Ok(self.tracker.update(output.into_detection(), now)),
            Err(err) => {
                self.tracker.reject_frame();
                Err(err)
            }
        }
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &BallTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut BallTracker {
        &mut self.tracker
    }
}
