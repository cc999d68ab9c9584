//! CountingPipeline for combining detection, tracking, and counting.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::counter::LineCounter;
use crate::error::Error;
use crate::tracker::{Centroid, CentroidTracker, Detection, TrackerConfig};

use super::DetectionSource;
use super::report::{FrameReport, RunSummary};

/// Configuration for a `CountingPipeline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Tracker association parameters.
    pub tracker: TrackerConfig,
    /// Vertical placement of the counting line as a fraction of frame
    /// height, from 0.0 (top) to 1.0 (bottom).
    pub line_position: f32,
    /// Detections with a bounding-box area below this are dropped before
    /// tracking.
    pub min_area: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            line_position: 0.5,
            min_area: 1500.0,
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> Result<(), Error> {
        if !self.line_position.is_finite() || !(0.0..=1.0).contains(&self.line_position) {
            return Err(Error::InvalidConfig(format!(
                "line_position must be within [0.0, 1.0], got {}",
                self.line_position
            )));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_area must be finite and non-negative, got {}",
                self.min_area
            )));
        }
        if !self.tracker.match_distance.is_finite() || self.tracker.match_distance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "match_distance must be finite and positive, got {}",
                self.tracker.match_distance
            )));
        }
        Ok(())
    }
}

/// An end-to-end item counter over a stream of detections.
///
/// The pipeline pulls frames from any `DetectionSource`, filters out
/// detections below the minimum area, advances the centroid tracker, and
/// feeds the surviving tracks to a line-crossing counter. Each processed
/// frame yields a `FrameReport` snapshot.
pub struct CountingPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    counter: LineCounter,
    min_area: f32,
    frames_processed: u64,
}

impl<D: DetectionSource> CountingPipeline<D> {
    /// Create a new counting pipeline for frames of the given height.
    ///
    /// The counting line lands at `floor(frame_height * line_position)`.
    pub fn new(detector: D, frame_height: u32, config: PipelineConfig) -> Result<Self, Error> {
        config.validate()?;
        if frame_height == 0 {
            return Err(Error::InvalidConfig(
                "frame height must be nonzero".to_string(),
            ));
        }

        let line_y = (frame_height as f32 * config.line_position).floor();
        debug!(
            "counting line at y={:.0} for {}px-high frames",
            line_y, frame_height
        );

        Ok(Self {
            detector,
            tracker: CentroidTracker::new(config.tracker),
            counter: LineCounter::new(line_y),
            min_area: config.min_area,
            frames_processed: 0,
        })
    }

    /// Create a new counting pipeline with default configuration.
    pub fn with_default_config(detector: D, frame_height: u32) -> Result<Self, Error> {
        Self::new(detector, frame_height, PipelineConfig::default())
    }

    /// Advance the pipeline by one already-acquired frame of detections.
    ///
    /// Detections smaller than the configured minimum area are ignored.
    /// Tracks are observed by the counter in ascending-id order, and
    /// counter records for deregistered ids are released afterwards.
    pub fn step(&mut self, detections: Vec<Detection>) -> FrameReport {
        self.frames_processed += 1;

        let centroids: Vec<Centroid> = detections
            .iter()
            .filter(|d| d.area() >= self.min_area)
            .map(|d| d.centroid())
            .collect();

        let objects = self.tracker.update(&centroids);
        for (&id, &position) in &objects {
            self.counter.observe(id, position);
        }
        self.counter.prune(&objects);

        FrameReport {
            frame: self.frames_processed,
            count: self.counter.count(),
            objects: objects.iter().map(|(&id, p)| (id, [p.x, p.y])).collect(),
        }
    }

    /// Pull one frame from the source and process it.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    pub fn process_frame(&mut self) -> Result<Option<FrameReport>, D::Error> {
        match self.detector.next_frame()? {
            Some(detections) => Ok(Some(self.step(detections))),
            None => Ok(None),
        }
    }

    /// Iterate over per-frame reports until the source ends.
    ///
    /// The iterator yields at most one `Err`; after a source error it is
    /// fused and produces nothing further.
    pub fn frames(&mut self) -> Frames<'_, D> {
        Frames {
            pipeline: self,
            done: false,
        }
    }

    /// Drive the pipeline until the source is exhausted.
    pub fn run(&mut self) -> Result<RunSummary, D::Error> {
        for report in self.frames() {
            report?;
        }
        Ok(self.summary())
    }

    /// Totals so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            count: self.counter.count(),
            total_frames: self.frames_processed,
        }
    }

    /// Get a reference to the underlying detection source.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detection source.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a reference to the underlying counter.
    pub fn counter(&self) -> &LineCounter {
        &self.counter
    }
}

/// Iterator over the reports of a running pipeline, created by
/// [`CountingPipeline::frames`].
pub struct Frames<'a, D: DetectionSource> {
    pipeline: &'a mut CountingPipeline<D>,
    done: bool,
}

impl<D: DetectionSource> Iterator for Frames<'_, D> {
    type Item = Result<FrameReport, D::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.pipeline.process_frame() {
            Ok(Some(report)) => Some(Ok(report)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
