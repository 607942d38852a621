//! Builder for creating well-formed Pose values from named joints.

use crate::tracker::{Keypoint, KeypointKind, Point, Pose};

/// Builder for creating `Pose` objects joint by joint.
///
/// Starts from the full null-keypoint vocabulary, so the built pose always
/// carries exactly 17 keypoints in canonical order.
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    score: f32,
    keypoints: Vec<Keypoint>,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self {
            score: 0.0,
            keypoints: KeypointKind::ALL.iter().map(|&p| Keypoint::null(p)).collect(),
        }
    }
}

impl PoseBuilder {
    /// Create a new pose builder with all keypoints null.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one joint's position and score.
    pub fn keypoint(mut self, part: KeypointKind, x: f32, y: f32, score: f32) -> Self {
        self.keypoints[part as usize] = Keypoint::new(part, score, Point::new(x, y));
        self
    }

    /// Set the overall pose confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final `Pose`.
    pub fn build(self) -> Pose {
        Pose::new(self.score, self.keypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_builder() {
        let pose = PoseBuilder::new()
            .score(0.95)
            .keypoint(KeypointKind::Nose, 10.0, 20.0, 0.8)
            .build();

        assert_eq!(pose.score, 0.95);
        assert!(pose.validate_shape().is_ok());

        let nose = pose.get(KeypointKind::Nose).unwrap();
        assert_eq!(nose.position, Point::new(10.0, 20.0));
        assert_eq!(nose.score, 0.8);
    }

    #[test]
    fn test_unset_joints_stay_null() {
        let pose = PoseBuilder::new().build();
        assert!(pose.keypoints.iter().all(|k| k.score == 0.0));
    }
}
