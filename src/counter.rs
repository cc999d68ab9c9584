mod crossing;
mod line_counter;

pub use crossing::CrossingRecord;
pub use line_counter::LineCounter;
