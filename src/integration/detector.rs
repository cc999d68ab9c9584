//! Trait for per-frame detection sources.

use crate::tracker::{Detection, Rect};

/// Trait for anything that yields per-frame object detections.
///
/// The pipeline pulls frames from the source one at a time; a source
/// signals end of stream by returning `Ok(None)`. Implement this to
/// connect whatever produces detections for your video, whether a
/// detection model, a background-subtraction stage, or recorded
/// detections replayed from disk.
///
/// # Example
///
/// ```ignore
/// use crosscount_rs::{Detection, DetectionSource};
///
/// struct RecordedDetections {
///     frames: std::vec::IntoIter<Vec<Detection>>,
/// }
///
/// impl DetectionSource for RecordedDetections {
///     type Error = std::convert::Infallible;
///
///     fn next_frame(&mut self) -> Result<Option<Vec<Detection>>, Self::Error> {
///         Ok(self.frames.next())
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for frame acquisition or detection failures.
    type Error;

    /// Produce the detections for the next frame.
    ///
    /// # Returns
    /// `Ok(Some(detections))` for a frame (possibly empty), `Ok(None)` at
    /// end of stream, or an error. Callers treat an error as fatal for
    /// the stream.
    fn next_frame(&mut self) -> Result<Option<Vec<Detection>>, Self::Error>;
}

/// Helper trait for converting stage-specific outputs to `Detection`.
///
/// Implement this for your detection stage's output format to enable easy
/// conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

impl IntoDetections for Vec<Rect> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter().map(Detection::from_rect).collect()
    }
}
