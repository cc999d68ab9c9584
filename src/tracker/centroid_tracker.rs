//! Greedy nearest-centroid multi-object tracker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::Centroid;
use crate::tracker::track::{Track, TrackId};

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Consecutive unmatched frames a track tolerates before deregistration
    pub max_disappeared: u32,
    /// Gating threshold in pixels: a detection farther than this from every
    /// surviving track starts a new identity instead of continuing one
    pub match_distance: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 15,
            match_distance: 80.0,
        }
    }
}

impl TrackerConfig {
    /// Derive the disappearance budget from the stream's frame rate: a track
    /// survives roughly half a second without detections.
    pub fn for_frame_rate(frame_rate: f32) -> Self {
        Self {
            max_disappeared: (frame_rate * 0.5) as u32,
            ..Self::default()
        }
    }
}

/// Maintains object identities across frames by greedy nearest-centroid
/// association.
///
/// Ids are assigned sequentially starting at 0 and are never reused; a
/// deregistered identity is gone for good.
pub struct CentroidTracker {
    tracks: BTreeMap<TrackId, Track>,
    next_id: TrackId,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: BTreeMap::new(),
            next_id: 0,
            config,
        }
    }

    /// Advance the tracker by one frame of detections.
    ///
    /// Returns an owned `{id: position}` snapshot of every surviving track,
    /// including tracks that went unmatched this frame but are still within
    /// their disappearance budget (they keep their last known position).
    /// Callers must not read spatial or temporal meaning into id order.
    pub fn update(&mut self, detections: &[Centroid]) -> BTreeMap<TrackId, Centroid> {
        // No detections: age every track, drop the expired, register nothing.
        if detections.is_empty() {
            let mut expired = Vec::new();
            for track in self.tracks.values_mut() {
                track.miss();
                if track.is_expired(self.config.max_disappeared) {
                    expired.push(track.id);
                }
            }
            for id in expired {
                self.deregister(id);
            }
            return self.snapshot();
        }

        // No existing tracks: every detection starts a new identity.
        if self.tracks.is_empty() {
            for &centroid in detections {
                self.register(centroid);
            }
            return self.snapshot();
        }

        // Rows are existing tracks in ascending-id order, columns are the
        // incoming detections in input order.
        let ids: Vec<TrackId> = self.tracks.keys().copied().collect();
        let positions: Vec<Centroid> = self.tracks.values().map(|t| t.position).collect();

        let dists = matching::distance_matrix(&positions, detections);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(&dists, self.config.match_distance);

        for (row, col) in matches {
            if let Some(track) = self.tracks.get_mut(&ids[row]) {
                track.hit(detections[col]);
            }
        }

        for row in unmatched_tracks {
            let id = ids[row];
            let expired = match self.tracks.get_mut(&id) {
                Some(track) => {
                    track.miss();
                    track.is_expired(self.config.max_disappeared)
                }
                None => false,
            };
            if expired {
                self.deregister(id);
            }
        }

        for col in unmatched_detections {
            self.register(detections[col]);
        }

        self.snapshot()
    }

    /// Number of currently live tracks (matched or within budget).
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn register(&mut self, centroid: Centroid) -> TrackId {
        let id = self.next_id;
        self.next_id += 1;
        self.tracks.insert(id, Track::new(id, centroid));
        trace!(
            "registered track {} at ({:.1}, {:.1})",
            id, centroid.x, centroid.y
        );
        id
    }

    fn deregister(&mut self, id: TrackId) {
        self.tracks.remove(&id);
        debug!("deregistered track {}", id);
    }

    fn snapshot(&self) -> BTreeMap<TrackId, Centroid> {
        self.tracks.iter().map(|(&id, t)| (id, t.position)).collect()
    }
}
