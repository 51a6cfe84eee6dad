mod ball_information;
mod ball_tracker;
mod config;
mod detection;
mod error;
mod sample_buffer;
mod track_state;

pub use ball_information::BallInformation;
pub use ball_tracker::BallTracker;
pub use config::{MAX_HISTORY_CAPACITY, TrackerConfig};
pub use detection::BallDetection;
pub use error::{ConfigError, TrackerError};
pub use sample_buffer::SampleBuffer;
pub use track_state::TrackingState;
