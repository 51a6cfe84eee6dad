//! Single ball tracking with windowed velocity and short-gap extrapolation.

use std::time::{Duration, Instant};

use nalgebra::Vector2;

use crate::tracker::ball_information::BallInformation;
use crate::tracker::config::TrackerConfig;
use crate::tracker::detection::BallDetection;
use crate::tracker::error::{ConfigError, TrackerError};
use crate::tracker::sample_buffer::SampleBuffer;
use crate::tracker::track_state::TrackingState;

/// Tracks one ball across frames.
///
/// Velocity is averaged over the whole retained history: every new sighting
/// is compared against the oldest sample still in the buffer, not the
/// previous frame. This smooths detector jitter at the cost of some lag.
/// Configure a history capacity of one to measure against the previous
/// sample only.
///
/// A tracker has a single writer. Drive it from one acquisition loop.
#[derive(Debug, Clone)]
pub struct BallTracker {
    history: SampleBuffer,
    state: TrackingState,
    config: TrackerConfig,
}

impl BallTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.history_capacity_len();
        log::debug!(
            "ball tracker created: capacity={}, timeout={:?}",
            capacity,
            config.extrapolation_timeout
        );
        Ok(Self {
            history: SampleBuffer::new(capacity),
            state: TrackingState::NotTracked,
            config,
        })
    }

    /// Feed the detector result for the frame captured at `now`.
    ///
    /// `now` must not go backwards between calls. A malformed detection, or a
    /// `now` that would break the ordering of stored samples, is treated like
    /// an invalid frame.
    pub fn update(&mut self, detection: Option<BallDetection>, now: Instant) -> TrackingState {
        if let Some(det) = &detection {
            if !det.is_valid() {
                log::warn!("rejecting malformed detection {:?}", det);
                return self.reject_frame();
            }
        }

        if let Some(newest) = self.history.newest().and_then(|s| s.timestamp()) {
            if now < newest || (now == newest && detection.is_some()) {
                log::warn!("rejecting frame: capture time does not advance past last sample");
                return self.reject_frame();
            }
        }

        let next = match (self.history.oldest().copied(), detection) {
            (None, Some(det)) => {
                self.push_sample(det, Vector2::zeros(), now);
                TrackingState::Tracked
            }
            (None, None) => TrackingState::NotTracked,
            (Some(oldest), Some(det)) => {
                let delta = elapsed_since(&oldest, now).as_secs_f32();
                let velocity = (det.center - oldest.position()) / delta;
                self.push_sample(det, velocity, now);
                TrackingState::Tracked
            }
            (Some(oldest), None) => {
                if elapsed_since(&oldest, now) < self.config.extrapolation_timeout {
                    TrackingState::Extrapolating
                } else {
                    log::warn!(
                        "ball lost for longer than {:?}, dropping {} samples",
                        self.config.extrapolation_timeout,
                        self.history.len()
                    );
                    self.history.clear();
                    TrackingState::NotTracked
                }
            }
        };

        self.set_state(next)
    }

    /// Mark this cycle's frame as unusable.
    ///
    /// History is left untouched; the state becomes `Error` until the next
    /// successful update.
    pub fn reject_frame(&mut self) -> TrackingState {
        self.set_state(TrackingState::Error)
    }

    /// Last sighting, or the empty observation when there is no history.
    pub fn current_information(&self) -> BallInformation {
        self.history.newest().copied().unwrap_or_default()
    }

    /// Last sighting projected to `now` at constant velocity.
    pub fn extrapolated_information(&self, now: Instant) -> Result<BallInformation, TrackerError> {
        if self.state != TrackingState::Extrapolating {
            return Err(TrackerError::NotExtrapolating { state: self.state });
        }
        Ok(self.current_information().extrapolate(now))
    }

    /// Observation to draw for the current state, if any.
    pub fn display_information(&self, now: Instant) -> Option<BallInformation> {
        match self.state {
            TrackingState::Tracked => Some(self.current_information()),
            TrackingState::Extrapolating => self.extrapolated_information(now).ok(),
            TrackingState::NotTracked | TrackingState::Error => None,
        }
    }

    /// Drop all history and return to `NotTracked`.
    pub fn reset(&mut self) {
        self.history.clear();
        self.set_state(TrackingState::NotTracked);
    }

    #[inline]
    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Retained samples, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &BallInformation> {
        self.history.iter()
    }

    fn push_sample(&mut self, det: BallDetection, velocity: Vector2<f32>, now: Instant) {
        log::trace!(
            "sample at ({:.1}, {:.1}) r={:.1}, velocity ({:.1}, {:.1})",
            det.center.x,
            det.center.y,
            det.radius,
            velocity.x,
            velocity.y
        );
        let sample = BallInformation::new(det.center, velocity, det.radius).captured_at(now);
        self.history.push(sample);
    }

    fn set_state(&mut self, next: TrackingState) -> TrackingState {
        if next != self.state {
            log::debug!("tracking state {} -> {}", self.state, next);
        }
        self.state = next;
        next
    }
}

fn elapsed_since(sample: &BallInformation, now: Instant) -> Duration {
    sample
        .timestamp()
        .map(|t| now.saturating_duration_since(t))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn tracker() -> BallTracker {
        BallTracker::new(TrackerConfig::default().with_extrapolation_timeout(ms(1000))).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = BallTracker::new(TrackerConfig::default().with_expected_frame_rate(-1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_oversized_history() {
        let result = BallTracker::new(TrackerConfig::default().with_history_capacity(usize::MAX));
        assert!(matches!(
            result,
            Err(ConfigError::HistoryCapacityTooLarge { .. })
        ));
    }

    #[test]
    fn test_initial_state() {
        let tracker = tracker();
        assert_eq!(tracker.state(), TrackingState::NotTracked);
        assert_eq!(tracker.history_len(), 0);
        assert_eq!(tracker.capacity(), 15);
        assert_eq!(tracker.current_information(), BallInformation::default());
    }

    #[test]
    fn test_empty_history_without_detection() {
        let mut tracker = tracker();
        assert_eq!(tracker.update(None, Instant::now()), TrackingState::NotTracked);
        assert_eq!(tracker.history_len(), 0);
    }

    #[test]
    fn test_first_detection_has_zero_velocity() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        let state = tracker.update(Some(BallDetection::new(12.0, 34.0, 5.0)), t0);
        assert_eq!(state, TrackingState::Tracked);

        let info = tracker.current_information();
        assert_eq!(info.position().x, 12.0);
        assert_eq!(info.position().y, 34.0);
        assert_eq!(info.radius(), 5.0);
        assert_eq!(info.velocity(), Vector2::zeros());
        assert_eq!(info.timestamp(), Some(t0));
    }

    #[test]
    fn test_velocity_measured_from_oldest_sample() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        tracker.update(Some(BallDetection::new(10.0, 0.0, 5.0)), t0 + ms(100));
        tracker.update(Some(BallDetection::new(40.0, 20.0, 5.0)), t0 + ms(200));

        // Average over 200 ms, not the last 100 ms step
        let velocity = tracker.current_information().velocity();
        assert_relative_eq!(velocity.x, 200.0, epsilon = 1e-2);
        assert_relative_eq!(velocity.y, 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_single_sample_history_uses_previous_frame() {
        let config = TrackerConfig::default().with_history_capacity(1);
        let mut tracker = BallTracker::new(config).unwrap();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        tracker.update(Some(BallDetection::new(10.0, 0.0, 5.0)), t0 + ms(100));
        tracker.update(Some(BallDetection::new(40.0, 0.0, 5.0)), t0 + ms(200));

        assert_eq!(tracker.history_len(), 1);
        assert_relative_eq!(tracker.current_information().velocity().x, 300.0, epsilon = 1e-2);
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let config = TrackerConfig::default().with_history_capacity(4);
        let mut tracker = BallTracker::new(config).unwrap();
        let t0 = Instant::now();
        for i in 0..20u64 {
            tracker.update(Some(BallDetection::new(i as f32, 0.0, 1.0)), t0 + ms(i * 33));
            assert!(tracker.history_len() <= 4);
        }
        assert_eq!(tracker.history_len(), 4);
        assert_eq!(tracker.history().next().unwrap().position().x, 16.0);
    }

    #[test]
    fn test_extrapolating_within_timeout() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        tracker.update(Some(BallDetection::new(50.0, 0.0, 5.0)), t0 + ms(500));

        let before = tracker.current_information();
        assert_eq!(tracker.update(None, t0 + ms(800)), TrackingState::Extrapolating);
        assert_eq!(tracker.history_len(), 2);
        assert_eq!(tracker.current_information(), before);
    }

    #[test]
    fn test_timeout_clears_history() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        assert_eq!(tracker.update(None, t0 + ms(1000)), TrackingState::NotTracked);
        assert_eq!(tracker.history_len(), 0);
        assert_eq!(tracker.current_information(), BallInformation::default());
    }

    #[test]
    fn test_reacquire_after_reset_starts_fresh() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        tracker.update(None, t0 + ms(1200));

        let state = tracker.update(Some(BallDetection::new(300.0, 200.0, 5.0)), t0 + ms(1300));
        assert_eq!(state, TrackingState::Tracked);
        assert_eq!(tracker.current_information().velocity(), Vector2::zeros());
    }

    #[test]
    fn test_extrapolated_information_requires_extrapolating() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        assert_eq!(
            tracker.extrapolated_information(t0),
            Err(TrackerError::NotExtrapolating {
                state: TrackingState::NotTracked
            })
        );

        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        assert!(tracker.extrapolated_information(t0).is_err());
    }

    #[test]
    fn test_reject_frame_preserves_history() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(1.0, 2.0, 5.0)), t0);
        let before = tracker.current_information();

        for _ in 0..3 {
            assert_eq!(tracker.reject_frame(), TrackingState::Error);
            assert_eq!(tracker.history_len(), 1);
            assert_eq!(tracker.current_information(), before);
        }
        assert!(tracker.display_information(t0).is_none());
    }

    #[test]
    fn test_malformed_detection_is_rejected() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.update(Some(BallDetection::new(1.0, 2.0, 5.0)), t0);

        let state = tracker.update(Some(BallDetection::new(3.0, 4.0, -2.0)), t0 + ms(33));
        assert_eq!(state, TrackingState::Error);
        assert_eq!(tracker.history_len(), 1);
    }

    #[test]
    fn test_non_advancing_clock_is_rejected() {
        let mut tracker = tracker();
        let t0 = Instant::now() + ms(100);
        tracker.update(Some(BallDetection::new(1.0, 2.0, 5.0)), t0);

        assert_eq!(
            tracker.update(Some(BallDetection::new(5.0, 2.0, 5.0)), t0),
            TrackingState::Error
        );
        assert_eq!(tracker.update(None, t0 - ms(50)), TrackingState::Error);
        assert_eq!(tracker.history_len(), 1);

        // Same instant without a detection is still a valid cycle
        assert_eq!(tracker.update(None, t0), TrackingState::Extrapolating);
    }

    #[test]
    fn test_display_information_follows_state() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        assert!(tracker.display_information(t0).is_none());

        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), t0);
        tracker.update(Some(BallDetection::new(10.0, 0.0, 5.0)), t0 + ms(100));
        let shown = tracker.display_information(t0 + ms(100)).unwrap();
        assert_eq!(shown.position().x, 10.0);

        tracker.update(None, t0 + ms(200));
        let shown = tracker.display_information(t0 + ms(200)).unwrap();
        assert_relative_eq!(shown.position().x, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_reset() {
        let mut tracker = tracker();
        tracker.update(Some(BallDetection::new(0.0, 0.0, 5.0)), Instant::now());
        tracker.reset();
        assert_eq!(tracker.state(), TrackingState::NotTracked);
        assert_eq!(tracker.history_len(), 0);
    }
}
