//! Error and issue types for the ranking pipeline.

use serde::Serialize;
use thiserror::Error;

use meridian_ephem::EphemerisError;

/// Everything that can go wrong while building a report.
///
/// Only [`RankError::EphemerisUnavailable`] aborts a run. The other variants
/// are recorded in [`Report::issues`](crate::Report::issues) and the report
/// is still produced.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RankError {
    /// A target's RA/Dec is non-finite or out of range; the target is dropped.
    #[error("invalid coordinate for {name}: {reason}")]
    InvalidCoordinate { name: String, reason: String },
    /// The Moon could not be evaluated for the site timestamp.
    #[error("moon position unavailable: {reason}")]
    EphemerisUnavailable { reason: String },
    /// The requested sort key is unknown; targets are left in catalog order.
    #[error("sortBy argument {key} not recognized, not sorting!")]
    UnrecognizedSortKey { key: String },
    /// No usable targets remain after parsing.
    #[error("catalog contains no usable targets")]
    EmptyCatalog,
    /// A catalog line could not be parsed; the line is skipped.
    #[error("catalog line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    /// A name appears more than once; the first occurrence is kept.
    #[error("duplicate target {name} on catalog line {line}, keeping the first entry")]
    DuplicateTarget { name: String, line: usize },
}

impl RankError {
    /// Whether this error invalidates the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RankError::EphemerisUnavailable { .. })
    }
}

impl From<EphemerisError> for RankError {
    fn from(err: EphemerisError) -> Self {
        RankError::EphemerisUnavailable {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ephemeris_is_fatal() {
        assert!(
            RankError::from(EphemerisError::NonFinite("distance")).is_fatal()
        );
        assert!(!RankError::EmptyCatalog.is_fatal());
        assert!(
            !RankError::UnrecognizedSortKey {
                key: "bogus".into()
            }
            .is_fatal()
        );
    }

    #[test]
    fn sort_key_message_names_key() {
        let err = RankError::UnrecognizedSortKey {
            key: "bogus".into(),
        };
        assert_eq!(err.to_string(), "sortBy argument bogus not recognized, not sorting!");
    }
}
