//! Integration module for connecting pose estimation backends with the
//! gesture tracker.
//!
//! This module provides traits and utilities for integrating various
//! inference backends (ONNX Runtime, TF.js bridges, etc.) with the
//! `GestureTracker`.

mod builder;
mod pipeline;
mod source;

pub use builder::PoseBuilder;
pub use pipeline::{PipelineError, TrackerPipeline};
pub use source::{IntoPoses, PoseSource};
