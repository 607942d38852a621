//! Pose normalization ahead of tracking.
//!
//! Sanitization is a fixed three-step pipeline over each raw pose, applied
//! in this exact order:
//!
//! 1. **Exclude**: every keypoint on the exclusion list has its score set
//!    to zero; its position is untouched.
//! 2. **Zero low-confidence**: every keypoint whose score is below the
//!    confidence threshold has its position reset to the origin; its score
//!    is untouched. Steps 1 and 2 are intentionally asymmetric: exclusion
//!    clears scores, thresholding clears positions.
//! 3. **Center**: the pose center becomes the shoulder midpoint when both
//!    shoulders have a positive score, otherwise the per-axis median over
//!    all positively-scored keypoint positions, otherwise the origin.
//!
//! The input pose is never mutated; callers always observe either the raw
//! pose or the fully sanitized one.

use crate::tracker::keypoint::{Keypoint, KeypointKind, Pose, TrackerError};
use crate::tracker::rect::Point;

/// Normalizes detected poses and computes their representative center.
#[derive(Debug, Clone)]
pub struct PoseSanitizer {
    min_confidence: f32,
    exclude: Vec<KeypointKind>,
}

impl PoseSanitizer {
    pub fn new(min_confidence: f32, exclude: Vec<KeypointKind>) -> Self {
        Self {
            min_confidence,
            exclude,
        }
    }

    /// Run the three-step pipeline, producing a new pose with a finalized
    /// center. Fails on poses that do not carry the 17-keypoint vocabulary.
    ///
    /// Sanitizing an already-sanitized pose with the same parameters is a
    /// no-op.
    pub fn sanitize(&self, pose: &Pose) -> Result<Pose, TrackerError> {
        pose.validate_shape()?;
        let mut out = pose.clone();

        for &part in &self.exclude {
            out.keypoints[part as usize].score = 0.0;
        }

        for kp in &mut out.keypoints {
            if kp.score < self.min_confidence {
                kp.position = Point::ORIGIN;
            }
        }

        out.center = Self::center(&out.keypoints);
        Ok(out)
    }

    fn center(keypoints: &[Keypoint]) -> Point {
        let left = &keypoints[KeypointKind::LeftShoulder as usize];
        let right = &keypoints[KeypointKind::RightShoulder as usize];
        if left.score > 0.0 && right.score > 0.0 {
            return left.position.midpoint(&right.position);
        }

        let scored: Vec<Point> = keypoints
            .iter()
            .filter(|k| k.score > 0.0)
            .map(|k| k.position)
            .collect();
        if scored.is_empty() {
            return Point::ORIGIN;
        }

        Point::new(
            median(scored.iter().map(|p| p.x).collect()),
            median(scored.iter().map(|p| p.y).collect()),
        )
    }
}

/// Median after ascending sort. Even counts average the two central
/// elements.
fn median(mut values: Vec<f32>) -> f32 {
    values.sort_by(f32::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}
