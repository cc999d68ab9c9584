//! Integration module for connecting detection sources with the counter.
//!
//! This module provides the traits and plumbing for feeding per-frame
//! detections from any backend into the tracking and counting stages, and
//! the serializable reports the pipeline emits.

mod builder;
mod detector;
mod pipeline;
mod report;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{CountingPipeline, Frames, PipelineConfig};
pub use report::{FrameReport, RunSummary};
