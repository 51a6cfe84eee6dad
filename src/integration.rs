//! Integration module for connecting ball detectors with the tracker.
//!
//! This module provides the detector trait, a builder for detections coming
//! from circle- or box-shaped outputs, and a pipeline that drives one detector
//! and one tracker per frame.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetection};
pub use pipeline::TrackerPipeline;
