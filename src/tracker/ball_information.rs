//! Timestamped ball observation with derived kinematics.

use std::f32::consts::PI;
use std::time::Instant;

use nalgebra::{Point2, Vector2};

/// One observation of the ball.
///
/// Units are image-space units; velocity is in units per second. An
/// observation is never mutated once the tracker has stored it, the tracker
/// builds a new one for every sighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallInformation {
    position: Point2<f32>,
    velocity: Vector2<f32>,
    radius: f32,
    timestamp: Option<Instant>,
}

impl Default for BallInformation {
    /// The empty observation: zeroed fields and no timestamp.
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            velocity: Vector2::zeros(),
            radius: 0.0,
            timestamp: None,
        }
    }
}

impl BallInformation {
    /// Create an observation without a capture time.
    ///
    /// The timestamp is assigned by the tracker when the observation is
    /// captured.
    pub fn new(position: Point2<f32>, velocity: Vector2<f32>, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            timestamp: None,
        }
    }

    pub(crate) fn captured_at(mut self, timestamp: Instant) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[inline]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Capture time, `None` for the empty observation.
    #[inline]
    pub fn timestamp(&self) -> Option<Instant> {
        self.timestamp
    }

    /// Speed magnitude in units per second.
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Direction of travel in radians, in `(-π, π]`.
    ///
    /// Uses the two-argument arctangent so vertical motion and all four
    /// quadrants are handled. A stationary ball reports 0.
    pub fn heading(&self) -> f32 {
        if self.velocity.x == 0.0 && self.velocity.y == 0.0 {
            return 0.0;
        }
        let heading = self.velocity.y.atan2(self.velocity.x);
        // atan2 yields -π for a negative-zero y component
        if heading <= -PI { PI } else { heading }
    }

    /// Project this observation forward at constant velocity.
    ///
    /// The result keeps velocity and radius and carries `now` as its
    /// timestamp. An observation without a timestamp is projected by zero
    /// elapsed time.
    pub fn extrapolate(&self, now: Instant) -> Self {
        let elapsed = self
            .timestamp
            .map(|t| now.saturating_duration_since(t).as_secs_f32())
            .unwrap_or(0.0);
        Self {
            position: self.position + self.velocity * elapsed,
            velocity: self.velocity,
            radius: self.radius,
            timestamp: Some(now),
        }
    }
}
