//! Single ball tracking across video frames.
//!
//! A [`BallTracker`] consumes one detector result per frame, keeps a bounded
//! window of recent sightings to estimate velocity, and extrapolates the ball's
//! position linearly through short occlusions.

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, TrackerPipeline};
pub use tracker::{
    BallDetection, BallInformation, BallTracker, ConfigError, TrackerConfig, TrackerError,
    TrackingState,
};
