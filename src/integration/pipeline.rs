//! TrackerPipeline for combining pose estimation with tracking.

use thiserror::Error;

use crate::tracker::{Gesture, GestureTracker, TrackerConfig, TrackerError};

use super::PoseSource;

/// Error type for pipeline failures, separating source and tracker faults.
#[derive(Debug, Error)]
pub enum PipelineError<E: std::fmt::Debug> {
    /// The pose source failed to produce poses.
    #[error("pose source error")]
    Source(E),
    /// The tracker rejected the frame.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// A combined tracker that bundles pose estimation with gesture tracking.
///
/// This struct provides a convenient way to run end-to-end tracking
/// by combining any `PoseSource` with the `GestureTracker`.
pub struct TrackerPipeline<S: PoseSource> {
    source: S,
    tracker: GestureTracker,
}

impl<S: PoseSource> TrackerPipeline<S> {
    /// Create a new tracking pipeline with the given source and tracker config.
    pub fn new(source: S, config: TrackerConfig) -> Self {
        Self {
            source,
            tracker: GestureTracker::new(config),
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(source: S) -> Self {
        Self::new(source, TrackerConfig::default())
    }

    /// Process a single frame and return the active gestures.
    ///
    /// This method runs pose estimation on the input image and then updates
    /// the tracker with the detected poses.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The active `Gesture` tracks, or a pipeline error.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Gesture>, PipelineError<S::Error>>
    where
        S::Error: std::fmt::Debug,
    {
        let poses = self
            .source
            .estimate(input, width, height)
            .map_err(PipelineError::Source)?;
        Ok(self.tracker.update(poses)?)
    }

    /// Get a reference to the underlying pose source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying pose source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut GestureTracker {
        &mut self.tracker
    }
}
