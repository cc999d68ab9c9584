//! Serializable per-frame and end-of-run reports.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::tracker::TrackId;

/// Snapshot of the pipeline after processing one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// 1-based index of the frame this report describes.
    pub frame: u64,
    /// Cumulative crossing count through this frame.
    pub count: u64,
    /// Position of every live track, keyed by id.
    pub objects: BTreeMap<TrackId, [f32; 2]>,
}

/// Totals for a fully consumed detection source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Objects counted across the whole run.
    pub count: u64,
    /// Frames processed.
    pub total_frames: u64,
}
