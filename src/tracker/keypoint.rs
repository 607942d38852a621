//! Pose and keypoint data model shared between inference and tracking.

use thiserror::Error;

use crate::tracker::rect::Point;

/// Error type for tracking failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// A pose did not carry the fixed 17-keypoint vocabulary.
    #[error("invalid pose shape: expected {expected} keypoints, got {got}")]
    InvalidPoseShape { expected: usize, got: usize },
}

/// The 17 named joints produced by pose estimation models, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum KeypointKind {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointKind {
    /// Number of joints in the vocabulary.
    pub const COUNT: usize = 17;

    /// All joints in canonical order.
    pub const ALL: [KeypointKind; Self::COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Joint pairs a renderer connects into skeleton segments.
pub const SKELETON_EDGES: [(KeypointKind, KeypointKind); 19] = [
    (KeypointKind::Nose, KeypointKind::LeftEye),
    (KeypointKind::Nose, KeypointKind::RightEye),
    (KeypointKind::Nose, KeypointKind::LeftEar),
    (KeypointKind::Nose, KeypointKind::RightEar),
    (KeypointKind::LeftEar, KeypointKind::LeftEye),
    (KeypointKind::RightEar, KeypointKind::RightEye),
    (KeypointKind::LeftEye, KeypointKind::RightEye),
    (KeypointKind::LeftShoulder, KeypointKind::RightShoulder),
    (KeypointKind::LeftShoulder, KeypointKind::LeftElbow),
    (KeypointKind::LeftShoulder, KeypointKind::LeftHip),
    (KeypointKind::RightShoulder, KeypointKind::RightElbow),
    (KeypointKind::RightShoulder, KeypointKind::RightHip),
    (KeypointKind::LeftElbow, KeypointKind::LeftWrist),
    (KeypointKind::RightElbow, KeypointKind::RightWrist),
    (KeypointKind::LeftHip, KeypointKind::RightHip),
    (KeypointKind::LeftHip, KeypointKind::LeftKnee),
    (KeypointKind::RightHip, KeypointKind::RightKnee),
    (KeypointKind::LeftKnee, KeypointKind::LeftAnkle),
    (KeypointKind::RightKnee, KeypointKind::RightAnkle),
];

/// A single detected joint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keypoint {
    /// Which joint this is
    pub part: KeypointKind,
    /// Confidence score in [0, 1]
    pub score: f32,
    /// Image-space position
    pub position: Point,
}

impl Keypoint {
    pub fn new(part: KeypointKind, score: f32, position: Point) -> Self {
        Self {
            part,
            score,
            position,
        }
    }

    /// A zero-score keypoint at the origin.
    pub fn null(part: KeypointKind) -> Self {
        Self::new(part, 0.0, Point::ORIGIN)
    }
}

/// One detected pose: an overall score, a representative center, and the
/// 17 keypoints in canonical joint order.
///
/// The center is the origin until [`PoseSanitizer`](crate::PoseSanitizer)
/// computes it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Overall detection confidence
    pub score: f32,
    /// Representative center point, finalized by sanitization
    pub center: Point,
    /// Keypoints in canonical joint order
    pub keypoints: Vec<Keypoint>,
}

impl Pose {
    /// Create a pose from raw model output. The center stays at the origin
    /// until sanitization.
    pub fn new(score: f32, keypoints: Vec<Keypoint>) -> Self {
        Self {
            score,
            center: Point::ORIGIN,
            keypoints,
        }
    }

    /// The padding sentinel: all keypoint scores zero, center at the origin.
    pub fn null() -> Self {
        Self {
            score: 0.0,
            center: Point::ORIGIN,
            keypoints: KeypointKind::ALL.iter().map(|&p| Keypoint::null(p)).collect(),
        }
    }

    /// Check that the pose carries exactly the fixed 17-keypoint vocabulary.
    pub fn validate_shape(&self) -> Result<(), TrackerError> {
        if self.keypoints.len() != KeypointKind::COUNT {
            return Err(TrackerError::InvalidPoseShape {
                expected: KeypointKind::COUNT,
                got: self.keypoints.len(),
            });
        }
        Ok(())
    }

    /// Look up a keypoint by joint. `None` if the pose is malformed.
    pub fn get(&self, part: KeypointKind) -> Option<&Keypoint> {
        self.keypoints.get(part as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_kind_count() {
        assert_eq!(KeypointKind::COUNT, 17);
        assert_eq!(KeypointKind::ALL.len(), 17);
    }

    #[test]
    fn test_keypoint_kind_from_index() {
        assert_eq!(KeypointKind::from_index(0), Some(KeypointKind::Nose));
        assert_eq!(KeypointKind::from_index(5), Some(KeypointKind::LeftShoulder));
        assert_eq!(KeypointKind::from_index(16), Some(KeypointKind::RightAnkle));
        assert_eq!(KeypointKind::from_index(17), None);
    }

    #[test]
    fn test_canonical_order_matches_discriminants() {
        for (i, kind) in KeypointKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_skeleton_edges_stay_in_vocabulary() {
        for (a, b) in SKELETON_EDGES {
            assert!((a as usize) < KeypointKind::COUNT);
            assert!((b as usize) < KeypointKind::COUNT);
        }
    }

    #[test]
    fn test_null_pose_shape() {
        let pose = Pose::null();
        assert!(pose.validate_shape().is_ok());
        assert_eq!(pose.center, Point::ORIGIN);
        assert!(pose.keypoints.iter().all(|k| k.score == 0.0));
    }

    #[test]
    fn test_validate_shape_rejects_wrong_count() {
        let pose = Pose::new(0.9, vec![Keypoint::null(KeypointKind::Nose)]);
        assert_eq!(
            pose.validate_shape(),
            Err(TrackerError::InvalidPoseShape {
                expected: 17,
                got: 1
            })
        );
    }

    #[test]
    fn test_get_by_part() {
        let mut pose = Pose::null();
        pose.keypoints[KeypointKind::Nose as usize] =
            Keypoint::new(KeypointKind::Nose, 0.9, Point::new(3.0, 4.0));

        let nose = pose.get(KeypointKind::Nose).unwrap();
        assert_eq!(nose.score, 0.9);
        assert_eq!(nose.position, Point::new(3.0, 4.0));
    }
}
