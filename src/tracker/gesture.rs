//! A single gesture track: one tracked person's recent pose history.

use crate::tracker::color::Hsl;
use crate::tracker::keypoint::Pose;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// One persistent track of poses across frames.
///
/// A gesture has no identifier beyond its color; identity is the unbroken
/// chain of per-frame matches. The history always holds exactly the
/// configured number of poses, most-recent first, padded with null poses
/// when the track is younger than its depth.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gesture {
    /// Render color assigned at creation
    pub color: Hsl,
    /// Current lifecycle state
    pub state: TrackState,
    /// Pose history, most-recent first; length is fixed at the configured depth
    pub history: Vec<Pose>,
}

impl Gesture {
    /// Start a track from its first pose. The history tail is padded with
    /// null poses up to `depth` entries. Depth is at least 1.
    pub fn new(pose: Pose, depth: usize, color: Hsl) -> Self {
        let depth = depth.max(1);
        let mut history = Vec::with_capacity(depth);
        history.push(pose);
        history.resize_with(depth, Pose::null);
        Self {
            color,
            state: TrackState::Created,
            history,
        }
    }

    /// The most recent pose.
    pub fn head(&self) -> &Pose {
        &self.history[0]
    }

    /// History depth.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Absorb a matched pose: prepend it and drop the oldest entry, keeping
    /// the history length fixed.
    pub fn advance(&mut self, pose: Pose) {
        self.history.insert(0, pose);
        self.history.pop();
        self.state = TrackState::Tracked;
    }

    pub fn mark_removed(&mut self) {
        self.state = TrackState::Removed;
    }

    /// Tight bounding box over the head pose's positively-scored keypoints.
    /// `None` when nothing is scored.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(
            self.head()
                .keypoints
                .iter()
                .filter(|k| k.score > 0.0)
                .map(|k| k.position),
        )
    }
}
