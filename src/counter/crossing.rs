//! Per-track crossing state.

/// Where a track stands in the counting state machine.
///
/// Tracks enter as `Seen` on their first observation and may advance to
/// `Counted` exactly once; `Counted` is terminal for the life of the id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossingRecord {
    /// Observed at least once without crossing; carries the vertical
    /// position from the previous frame.
    Seen { prev_y: f32 },
    /// Crossed the counting line.
    Counted,
}
