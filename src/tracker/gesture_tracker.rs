//! Main gesture tracking algorithm.

use tracing::debug;

use crate::tracker::color::GoldenAnglePalette;
use crate::tracker::gesture::Gesture;
use crate::tracker::keypoint::{KeypointKind, Pose, TrackerError};
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::Point;
use crate::tracker::sanitizer::PoseSanitizer;

/// Configuration for the GestureTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Keypoints below this score lose their position during sanitization
    pub min_confidence: f32,
    /// Maximum head-center distance at which a track can claim a pose
    pub dist_thresh: f32,
    /// Per-track pose history depth
    pub gest_n: usize,
    /// Keypoints suppressed before tracking
    pub exclude: Vec<KeypointKind>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.1,
            dist_thresh: 100.0,
            gest_n: 5,
            exclude: Vec::new(),
        }
    }
}

/// Frame-to-frame pose tracker.
///
/// Owns the active gesture list. Once per frame, [`update`](Self::update)
/// consumes the detected poses, matches them against track head centers by
/// greedy nearest-center assignment, and applies continuation, removal, and
/// creation. The whole sequence completes within the call; callers never
/// observe a half-updated track list.
pub struct GestureTracker {
    gestures: Vec<Gesture>,
    sanitizer: PoseSanitizer,
    palette: GoldenAnglePalette,
    config: TrackerConfig,
    frame_id: u64,
}

impl GestureTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_palette(config, GoldenAnglePalette::new())
    }

    /// Create a tracker with an explicit color palette, e.g. seeded for
    /// deterministic tests.
    pub fn with_palette(config: TrackerConfig, palette: GoldenAnglePalette) -> Self {
        let sanitizer = PoseSanitizer::new(config.min_confidence, config.exclude.clone());
        Self {
            gestures: Vec::new(),
            sanitizer,
            palette,
            config,
            frame_id: 0,
        }
    }

    /// The active tracks, most recent frame's state.
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Process one frame of detected poses and return the active tracks.
    ///
    /// Fails fast with [`TrackerError::InvalidPoseShape`] when any pose does
    /// not carry the fixed 17-keypoint vocabulary; the track list is left
    /// untouched in that case.
    pub fn update(&mut self, poses: Vec<Pose>) -> Result<Vec<Gesture>, TrackerError> {
        let poses = poses
            .iter()
            .map(|p| self.sanitizer.sanitize(p))
            .collect::<Result<Vec<_>, _>>()?;
        self.frame_id += 1;

        // Greedy nearest-center assignment on head centers.
        let track_centers: Vec<Point> = self.gestures.iter().map(|g| g.head().center).collect();
        let pose_centers: Vec<Point> = poses.iter().map(|p| p.center).collect();
        let dists = matching::center_distance(&track_centers, &pose_centers);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_poses,
        } = matching::greedy_assignment(&dists, self.config.dist_thresh);

        // Continuation: matched tracks absorb their pose. Each pose is
        // claimed at most once, so taking out of the slot cannot miss.
        let mut pose_slots: Vec<Option<Pose>> = poses.into_iter().map(Some).collect();
        let mut claimed = vec![false; self.gestures.len()];
        for &(itrack, ipose) in &matches {
            if let Some(pose) = pose_slots[ipose].take() {
                self.gestures[itrack].advance(pose);
                claimed[itrack] = true;
            }
        }

        // Removal: rebuild the active list from claimed tracks. A single
        // unmatched frame terminates a track.
        let mut survivors = Vec::with_capacity(self.gestures.len() + unmatched_poses.len());
        for (i, mut gesture) in self.gestures.drain(..).enumerate() {
            if claimed[i] {
                survivors.push(gesture);
            } else {
                gesture.mark_removed();
            }
        }

        // Creation: every unclaimed pose starts a new track.
        for ipose in &unmatched_poses {
            if let Some(pose) = pose_slots[*ipose].take() {
                survivors.push(Gesture::new(
                    pose,
                    self.config.gest_n,
                    self.palette.next_color(),
                ));
            }
        }

        self.gestures = survivors;

        debug!(
            frame = self.frame_id,
            matched = matches.len(),
            created = unmatched_poses.len(),
            removed = unmatched_tracks.len(),
            active = self.gestures.len(),
            "frame update"
        );

        Ok(self.gestures.clone())
    }
}
