//! One ranking run from catalog rows to an ordered, annotated report.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use meridian_ephem::{MoonState, compute_moon};
use meridian_frames::ObserverSite;

use crate::catalog::CatalogRow;
use crate::criteria::RankingCriteria;
use crate::error::RankError;
use crate::pipeline::rank;
use crate::proximity::{ProximityWarning, nearest_neighbours, scan_proximity};
use crate::target::{Target, observe};

/// A single time slice: one site, one Moon, every target judged against both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub site: ObserverSite,
    pub moon: MoonState,
    pub criteria: RankingCriteria,
    /// Filtered and sorted.
    pub targets: Vec<Target>,
    pub warnings: Vec<ProximityWarning>,
    /// Recoverable problems, in the order they were found.
    pub issues: Vec<RankError>,
}

/// Build a report for `rows` as seen from `site`.
///
/// The Moon is computed once, up front; failure there is the only error.
/// Duplicate names keep their first row. Rows with bad coordinates are
/// dropped and recorded. Proximity is scanned over every usable target
/// before the cuts are applied.
pub fn build_report(
    rows: &[CatalogRow],
    site: &ObserverSite,
    criteria: &RankingCriteria,
) -> Result<Report, RankError> {
    let moon = compute_moon(site)?;
    let mut issues = Vec::new();

    // First row per name wins; catalog duplicates share a source id.
    let mut seen = HashSet::new();
    let mut targets: Vec<Target> = Vec::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.name.as_str()) {
            warn!(name = %row.name, line = row.line, "duplicate target ignored");
            issues.push(RankError::DuplicateTarget {
                name: row.name.clone(),
                line: row.line,
            });
            continue;
        }
        match observe(row, site, &moon) {
            Ok(target) => targets.push(target),
            Err(err) => {
                warn!(name = %row.name, error = %err, "target dropped");
                issues.push(err);
            }
        }
    }

    if targets.is_empty() {
        warn!("no usable targets");
        issues.push(RankError::EmptyCatalog);
    }

    nearest_neighbours(&mut targets);
    let warnings = scan_proximity(&targets, criteria.check_proximity);

    let observed = targets.len();
    let ranked = rank(targets, criteria);
    issues.extend(ranked.issue);

    debug!(
        rows = rows.len(),
        observed,
        kept = ranked.targets.len(),
        warnings = warnings.len(),
        moon_illuminated = moon.illuminated_fraction,
        "report built"
    );

    Ok(Report {
        site: *site,
        moon,
        criteria: criteria.clone(),
        targets: ranked.targets,
        warnings,
        issues,
    })
}
