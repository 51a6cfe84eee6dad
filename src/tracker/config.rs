//! Tracker configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tracker::error::ConfigError;

/// Largest history a tracker may retain.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

/// Configuration for the [`BallTracker`](super::BallTracker).
///
/// Fixed once the tracker is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Span of history used to average velocity.
    pub speed_estimation_window: Duration,
    /// How long to keep extrapolating after the oldest retained sighting
    /// before the track is dropped.
    pub extrapolation_timeout: Duration,
    /// Expected input frame rate. Only used to size the history buffer.
    pub expected_frame_rate: f64,
    /// Explicit history size, overriding the one derived from the frame rate.
    /// `Some(1)` measures velocity against the previous sample only.
    pub history_capacity: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            speed_estimation_window: Duration::from_millis(500),
            extrapolation_timeout: Duration::from_millis(1500),
            expected_frame_rate: 30.0,
            history_capacity: None,
        }
    }
}

impl TrackerConfig {
    pub fn with_speed_estimation_window(mut self, window: Duration) -> Self {
        self.speed_estimation_window = window;
        self
    }

    pub fn with_extrapolation_timeout(mut self, timeout: Duration) -> Self {
        self.extrapolation_timeout = timeout;
        self
    }

    pub fn with_expected_frame_rate(mut self, frame_rate: f64) -> Self {
        self.expected_frame_rate = frame_rate;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    /// Number of samples the history buffer retains.
    ///
    /// `round(frame_rate * window)`, never less than one, unless an explicit
    /// capacity is configured.
    pub fn history_capacity_len(&self) -> usize {
        match self.history_capacity {
            Some(capacity) => capacity,
            None => {
                let samples =
                    (self.expected_frame_rate * self.speed_estimation_window.as_secs_f64()).round();
                (samples as usize).max(1)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.expected_frame_rate.is_finite() || self.expected_frame_rate <= 0.0 {
            return Err(ConfigError::InvalidFrameRate(self.expected_frame_rate));
        }
        if self.extrapolation_timeout.is_zero() {
            return Err(ConfigError::ZeroExtrapolationTimeout);
        }
        match self.history_capacity {
            Some(0) => return Err(ConfigError::ZeroHistoryCapacity),
            None if self.speed_estimation_window.is_zero() => {
                return Err(ConfigError::ZeroEstimationWindow);
            }
            _ => {}
        }
        let capacity = self.history_capacity_len();
        if capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryCapacityTooLarge {
                requested: capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
