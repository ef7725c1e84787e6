//! Error types for the analytic ephemeris.

use thiserror::Error;

/// Errors from Sun/Moon evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The instant lies outside the range the series are fitted for.
    #[error("ephemeris unavailable for JD {jd_tt} (supported years {min_year}..={max_year})")]
    OutOfRange {
        jd_tt: f64,
        min_year: i32,
        max_year: i32,
    },
    /// The series produced a non-finite value.
    #[error("ephemeris produced a non-finite {0}")]
    NonFinite(&'static str),
}
