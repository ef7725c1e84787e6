//! Filter and sort stages.

use tracing::warn;

use crate::criteria::{RankingCriteria, SortDirection, SortKey, passes_cuts};
use crate::error::RankError;
use crate::target::Target;

/// Targets that pass the cuts, in catalog order.
pub fn filter_targets(targets: Vec<Target>, criteria: &RankingCriteria) -> Vec<Target> {
    targets
        .into_iter()
        .filter(|t| passes_cuts(t, criteria))
        .collect()
}

/// Stable sort; equal keys keep catalog order in either direction.
pub fn sort_targets(targets: &mut [Target], key: SortKey, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => targets.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => targets.sort_by(|a, b| key.compare(b, a)),
    }
}

/// Result of [`rank`]: the ordered targets and any configuration problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub targets: Vec<Target>,
    pub issue: Option<RankError>,
}

/// Filter then sort. An unrecognised sort key leaves the filtered targets in
/// catalog order and is returned as an issue.
pub fn rank(targets: Vec<Target>, criteria: &RankingCriteria) -> Ranked {
    let mut kept = filter_targets(targets, criteria);
    let issue = match criteria.sort_key() {
        Ok(key) => {
            sort_targets(&mut kept, key, criteria.direction);
            None
        }
        Err(key) => {
            warn!(sort_by = %key, "unrecognised sort key, leaving catalog order");
            Some(RankError::UnrecognizedSortKey { key })
        }
    };
    Ranked {
        targets: kept,
        issue,
    }
}
