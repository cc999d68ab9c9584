//! Single tracked object identity.

use crate::tracker::rect::Centroid;

/// Unique identifier of a tracked object.
///
/// Ids are assigned sequentially by a tracker instance and are never reused
/// within that tracker's lifetime, so a deregistered id can never collide
/// with a later object.
pub type TrackId = u64;

/// A persisted object identity maintained across frames.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,
    /// Most recent matched centroid
    pub position: Centroid,
    /// Consecutive frames without a matching detection
    pub disappeared: u32,
}

impl Track {
    /// Create a freshly registered track at the given centroid.
    pub fn new(id: TrackId, position: Centroid) -> Self {
        Self {
            id,
            position,
            disappeared: 0,
        }
    }

    /// Record a matched detection: move to the new centroid and clear the
    /// disappearance counter.
    pub fn hit(&mut self, position: Centroid) {
        self.position = position;
        self.disappeared = 0;
    }

    /// Record a frame with no matching detection.
    pub fn miss(&mut self) {
        self.disappeared += 1;
    }

    /// Whether the track has outlived its disappearance budget.
    pub fn is_expired(&self, max_disappeared: u32) -> bool {
        self.disappeared > max_disappeared
    }
}
