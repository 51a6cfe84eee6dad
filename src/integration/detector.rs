//! Trait for ball detection backends.

use crate::tracker::BallDetection;

/// Trait for ball detection backends.
///
/// Implement this trait to connect any detector (color thresholding, a
/// learned model, ...) to the tracker. The detector picks its single best
/// candidate per frame and returns `None` when it finds nothing.
///
/// # Example
///
/// ```ignore
/// use balltrack_rs::{BallDetection, DetectionSource};
///
/// struct MyDetector {
///     // Your thresholds or model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Output = Option<BallDetection>;
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Self::Output, Self::Error> {
///         // Find the ball and return its enclosing circle
///         Ok(None)
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Detector-specific output, reduced to one candidate by the pipeline.
    type Output: IntoDetection;

    /// Error type for detection failures.
    type Error;

    /// Run detection on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The detector output for this frame, or an error.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Self::Output, Self::Error>;
}

/// Helper trait for converting detector-specific outputs to a `BallDetection`.
pub trait IntoDetection {
    /// Convert the output into a detection, or `None` when nothing was found.
    fn into_detection(self) -> Option<BallDetection>;
}

impl IntoDetection for BallDetection {
    fn into_detection(self) -> Option<BallDetection> {
        Some(self)
    }
}

impl IntoDetection for Option<BallDetection> {
    fn into_detection(self) -> Option<BallDetection> {
        self
    }
}

/// Picks the candidate with the largest radius.
impl IntoDetection for Vec<BallDetection> {
    fn into_detection(self) -> Option<BallDetection> {
        self.into_iter()
            .filter(BallDetection::is_valid)
            .max_by(|a, b| a.radius.total_cmp(&b.radius))
    }
}
