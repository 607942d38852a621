mod color;
mod gesture;
mod gesture_tracker;
mod keypoint;
mod matching;
mod rect;
mod sanitizer;
mod track_state;

pub use color::{GoldenAnglePalette, Hsl};
pub use gesture::Gesture;
pub use gesture_tracker::{GestureTracker, TrackerConfig};
pub use keypoint::{Keypoint, KeypointKind, Pose, SKELETON_EDGES, TrackerError};
pub use rect::{Point, Rect};
pub use sanitizer::PoseSanitizer;
pub use track_state::TrackState;
