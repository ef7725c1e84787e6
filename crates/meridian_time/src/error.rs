//! Error types for time handling.

use thiserror::Error;

/// Errors from timestamp parsing and calendar validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The timestamp string does not match any accepted layout.
    #[error("unrecognised timestamp '{0}' (expected YYYY/MM/DD HH:MM:SS)")]
    UnrecognisedFormat(String),
    /// A calendar field is out of range (month 13, minute 61, ...).
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(&'static str),
    /// The system clock reports a time before the Unix epoch.
    #[error("system clock is before 1970-01-01")]
    ClockBeforeEpoch,
}
