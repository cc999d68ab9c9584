//! Detection input type for the tracker front-end.

use crate::tracker::rect::{Centroid, Rect};

/// A single foreground blob reported by the detector for one frame.
///
/// Detections are transient: the tracker reads the centroid, the pipeline
/// reads the area, and nothing is retained past the frame that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Detection {
    /// Source bounding box of the blob
    pub bbox: Rect,
}

impl Detection {
    /// Create a detection from TLBR corner coordinates (x1, y1, x2, y2).
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
        }
    }

    /// Create a detection from an existing bounding box.
    pub fn from_rect(bbox: Rect) -> Self {
        Self { bbox }
    }

    /// Centroid of the source bounding box.
    #[inline]
    pub fn centroid(&self) -> Centroid {
        self.bbox.centroid()
    }

    /// Area of the source bounding box in pixels².
    #[inline]
    pub fn area(&self) -> f32 {
        self.bbox.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_from_tlbr() {
        let det = Detection::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(det.bbox.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(det.centroid().x, 25.0);
        assert_eq!(det.centroid().y, 40.0);
        assert_eq!(det.area(), 1200.0);
    }
}
