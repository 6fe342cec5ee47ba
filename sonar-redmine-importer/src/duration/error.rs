//! Duration parsing error types.

use thiserror::Error;

/// Returned when an effort string cannot be read as a duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse duration: {input}")]
pub struct DurationParseError {
    /// The original effort string.
    pub input: String,
}
