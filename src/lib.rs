//! Multi-object centroid tracking and line-crossing counting.
//!
//! crosscount-rs turns a stream of per-frame object detections into a
//! single number: how many distinct objects crossed a horizontal line.
//! Detections come from any [`DetectionSource`]; a greedy nearest-centroid
//! tracker keeps ids stable across frames, and a [`LineCounter`] counts
//! each id at most once when its vertical position crosses the line.
//!
//! # Quick start
//!
//! ```
//! use crosscount_rs::{CountingPipeline, Detection, DetectionSource};
//!
//! struct Recorded {
//!     frames: std::vec::IntoIter<Vec<Detection>>,
//! }
//!
//! impl DetectionSource for Recorded {
//!     type Error = std::convert::Infallible;
//!
//!     fn next_frame(&mut self) -> Result<Option<Vec<Detection>>, Self::Error> {
//!         Ok(self.frames.next())
//!     }
//! }
//!
//! // One object moving down a 100px-high frame; the default config puts
//! // the counting line at y=50.
//! let object = |y: f32| vec![Detection::new(20.0, y - 25.0, 70.0, y + 25.0)];
//! let source = Recorded {
//!     frames: vec![object(20.0), object(45.0), object(70.0)].into_iter(),
//! };
//!
//! let mut pipeline = CountingPipeline::with_default_config(source, 100)?;
//! let summary = pipeline.run()?;
//! assert_eq!(summary.count, 1);
//! assert_eq!(summary.total_frames, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod counter;
pub mod integration;
pub mod tracker;

mod error;

pub use counter::{CrossingRecord, LineCounter};
pub use error::Error;
pub use integration::{
    CountingPipeline, DetectionBuilder, DetectionSource, FrameReport, Frames, IntoDetections,
    PipelineConfig, RunSummary,
};
pub use tracker::{Centroid, CentroidTracker, Detection, Rect, Track, TrackId, TrackerConfig};
