//! Frame-to-frame pose tracking with bounded gesture histories.
//!
//! Each frame, detected poses are sanitized, matched against the active
//! tracks by greedy nearest-center assignment, and folded into fixed-depth
//! pose histories ("gestures") that a renderer can draw as colored skeleton
//! overlays. Inference and rendering stay outside the crate; poses come in
//! and gestures go out as plain structured data.
//!
//! # Example
//!
//! ```
//! use gesturetrack_rs::{GestureTracker, KeypointKind, PoseBuilder, TrackerConfig};
//!
//! let mut tracker = GestureTracker::new(TrackerConfig::default());
//!
//! // One detected pose this frame.
//! let pose = PoseBuilder::new()
//!     .score(0.9)
//!     .keypoint(KeypointKind::LeftShoulder, 100.0, 120.0, 0.9)
//!     .keypoint(KeypointKind::RightShoulder, 140.0, 120.0, 0.9)
//!     .build();
//!
//! let gestures = tracker.update(vec![pose]).unwrap();
//! assert_eq!(gestures.len(), 1);
//! ```

pub mod integration;
pub mod tracker;

pub use integration::{IntoPoses, PipelineError, PoseBuilder, PoseSource, TrackerPipeline};
pub use tracker::{
    Gesture, GestureTracker, GoldenAnglePalette, Hsl, Keypoint, KeypointKind, Point, Pose,
    PoseSanitizer, Rect, SKELETON_EDGES, TrackState, TrackerConfig, TrackerError,
};
