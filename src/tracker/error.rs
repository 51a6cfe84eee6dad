//! Error types for tracker configuration and misuse.

use std::path::PathBuf;

use thiserror::Error;

use crate::tracker::track_state::TrackingState;

/// Errors returned by tracker queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// An extrapolated position was requested outside the `Extrapolating` state.
    #[error("extrapolated information requested while tracker is {state}")]
    NotExtrapolating { state: TrackingState },
}

/// Errors raised while building or loading a [`TrackerConfig`](super::TrackerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected frame rate must be finite and positive, got {0}")]
    InvalidFrameRate(f64),
    #[error("extrapolation timeout must be greater than zero")]
    ZeroExtrapolationTimeout,
    #[error("speed estimation window must be greater than zero")]
    ZeroEstimationWindow,
    #[error("history capacity must hold at least one sample")]
    ZeroHistoryCapacity,
    #[error("history capacity of {requested} samples exceeds the limit of {max}")]
    HistoryCapacityTooLarge { requested: usize, max: usize },
    #[error("failed to read tracker config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tracker config: {0}")]
    Parse(#[from] serde_json::Error),
}
