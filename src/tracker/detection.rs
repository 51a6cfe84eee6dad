//! Per-frame detector output consumed by the tracker.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Best ball candidate found in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallDetection {
    /// Center of the enclosing circle
    pub center: Point2<f32>,
    /// Radius of the enclosing circle
    pub radius: f32,
}

impl BallDetection {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
        }
    }

    pub fn from_point(center: Point2<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Finite center and a finite, non-negative radius.
    pub fn is_valid(&self) -> bool {
        self.center.x.is_finite()
            && self.center.y.is_finite()
            && self.radius.is_finite()
            && self.radius >= 0.0
    }
}
