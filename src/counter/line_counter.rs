//! Line-crossing counter over tracked object positions.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::counter::crossing::CrossingRecord;
use crate::tracker::{Centroid, TrackId};

/// Counts tracks whose vertical position crosses a horizontal line.
///
/// The counter is edge-triggered: a crossing exists only when consecutive
/// observations of the same id straddle the line, so at least two samples
/// are required and an object sitting on the line contributes nothing.
/// Each id is counted at most once, in either direction.
pub struct LineCounter {
    line_y: f32,
    records: HashMap<TrackId, CrossingRecord>,
    count: u64,
}

impl LineCounter {
    pub fn new(line_y: f32) -> Self {
        Self {
            line_y,
            records: HashMap::new(),
            count: 0,
        }
    }

    /// Feed one observation of a track and report whether it crossed the
    /// line on this frame.
    ///
    /// The first observation of an id only establishes its reference
    /// position. Once an id has been counted, further observations are
    /// ignored and no longer move its reference position.
    pub fn observe(&mut self, id: TrackId, position: Centroid) -> bool {
        let y = position.y;
        match self.records.get(&id) {
            Some(CrossingRecord::Counted) => false,
            Some(&CrossingRecord::Seen { prev_y }) => {
                let downward = prev_y < self.line_y && self.line_y <= y;
                let upward = prev_y > self.line_y && self.line_y >= y;
                if downward || upward {
                    self.records.insert(id, CrossingRecord::Counted);
                    self.count += 1;
                    debug!(
                        "track {} crossed line y={:.1} ({:.1} -> {:.1}), count now {}",
                        id, self.line_y, prev_y, y, self.count
                    );
                    true
                } else {
                    self.records.insert(id, CrossingRecord::Seen { prev_y: y });
                    false
                }
            }
            None => {
                self.records.insert(id, CrossingRecord::Seen { prev_y: y });
                false
            }
        }
    }

    /// Discard records for ids no longer alive in the tracker.
    ///
    /// Deregistered ids are never seen again, so their records can only
    /// waste memory over a long run.
    pub fn prune(&mut self, live: &BTreeMap<TrackId, Centroid>) {
        self.records.retain(|id, _| live.contains_key(id));
    }

    /// Total crossings observed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn line_y(&self) -> f32 {
        self.line_y
    }

    pub fn is_counted(&self, id: TrackId) -> bool {
        matches!(self.records.get(&id), Some(CrossingRecord::Counted))
    }
}
