//! Error types for coordinate handling.

use thiserror::Error;

/// Errors from coordinate validation and frame transforms.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FrameError {
    /// RA/Dec is non-finite or outside RA ∈ [0, 2π), Dec ∈ [−π/2, π/2].
    #[error("invalid coordinate: ra={ra_rad} rad, dec={dec_rad} rad")]
    InvalidCoordinate { ra_rad: f64, dec_rad: f64 },
    /// Catalog epoch is non-finite.
    #[error("invalid epoch: {0}")]
    InvalidEpoch(f64),
    /// Observer location parameter out of range.
    #[error("invalid site: {0}")]
    InvalidSite(&'static str),
}
