//! Builder for creating BallDetection objects from various detector outputs.

use nalgebra::Point2;

use crate::tracker::BallDetection;

/// Builder for creating `BallDetection` objects from various input formats.
///
/// Box formats are converted to the circle centered on the box whose
/// diameter is the box's longer side.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    cx: f32,
    cy: f32,
    radius: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the circle directly from its center and radius.
    pub fn circle(mut self, cx: f32, cy: f32, radius: f32) -> Self {
        self.cx = cx;
        self.cy = cy;
        self.radius = radius;
        self
    }

    /// Set from a bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.xywh((x1 + x2) / 2.0, (y1 + y2) / 2.0, x2 - x1, y2 - y1)
    }

    /// Set from a bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.cx = cx;
        self.cy = cy;
        self.radius = w.abs().max(h.abs()) / 2.0;
        self
    }

    /// Set from a bounding box in TLWH format (top, left, width, height).
    pub fn tlwh(self, t: f32, l: f32, w: f32, h: f32) -> Self {
        self.xywh(l + w / 2.0, t + h / 2.0, w, h)
    }

    /// Build the final `BallDetection`.
    pub fn build(self) -> BallDetection {
        BallDetection::from_point(Point2::new(self.cx, self.cy), self.radius)
    }
}
