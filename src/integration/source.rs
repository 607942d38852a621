//! Trait for pose estimation inference backends.

use crate::tracker::Pose;

/// Trait for pose estimation inference backends.
///
/// Implement this trait to connect any pose model to the gesture tracker.
///
/// # Example
///
/// ```ignore
/// use gesturetrack_rs::{PoseSource, Pose};
///
/// struct MyEstimator {
///     // Your model here
/// }
///
/// impl PoseSource for MyEstimator {
///     type Error = std::io::Error;
///
///     fn estimate(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Pose>, Self::Error> {
///         // Run inference and return one pose per detected person
///         Ok(vec![])
///     }
/// }
/// ```
pub trait PoseSource {
    /// Error type for estimation failures.
    type Error;

    /// Run inference on raw image data and return the detected poses.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// One `Pose` per detected person, or an error.
    fn estimate(&mut self, input: &[u8], width: u32, height: u32)
    -> Result<Vec<Pose>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Pose` values.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoPoses {
    /// Convert the output into a vector of poses.
    fn into_poses(self) -> Vec<Pose>;
}

impl IntoPoses for Vec<Pose> {
    fn into_poses(self) -> Vec<Pose> {
        self
    }
}
