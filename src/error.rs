//! Crate-level error types.

use thiserror::Error;

/// Errors raised while assembling a counting pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A configuration value is outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
