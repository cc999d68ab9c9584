mod centroid_tracker;
mod detection;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use detection::Detection;
pub use rect::{Centroid, Rect};
pub use track::{Track, TrackId};
