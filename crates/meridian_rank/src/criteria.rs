//! Cut and sort settings for a ranking run.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Field a report can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Elevation,
    Azimuth,
    MoonDist,
    Magnitude,
}

impl SortKey {
    /// Ascending order of two targets on this key.
    ///
    /// Targets without a magnitude sort above every numeric magnitude.
    pub fn compare(self, a: &Target, b: &Target) -> Ordering {
        match self {
            SortKey::Elevation => a.elevation_deg.total_cmp(&b.elevation_deg),
            SortKey::Azimuth => a.azimuth_deg.total_cmp(&b.azimuth_deg),
            SortKey::MoonDist => a.moon_dist_deg.total_cmp(&b.moon_dist_deg),
            SortKey::Magnitude => match (a.magnitude, b.magnitude) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elevation" => Ok(SortKey::Elevation),
            "azimuth" => Ok(SortKey::Azimuth),
            "moonDist" | "moon_dist" | "moon-dist" => Ok(SortKey::MoonDist),
            "magnitude" => Ok(SortKey::Magnitude),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Elevation => "elevation",
            SortKey::Azimuth => "azimuth",
            SortKey::MoonDist => "moonDist",
            SortKey::Magnitude => "magnitude",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Cut bounds (degrees / magnitudes) and sort settings.
///
/// `sort_by` is kept as text so that an unknown key can be reported instead
/// of rejected up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingCriteria {
    pub min_moon_dist: f64,
    pub max_moon_dist: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
    pub max_magnitude: f64,
    pub sort_by: String,
    pub direction: SortDirection,
    /// Include every target regardless of the bounds above.
    pub no_cuts: bool,
    /// Proximity warning threshold in degrees; negative disables warnings.
    pub check_proximity: f64,
}

impl Default for RankingCriteria {
    fn default() -> Self {
        Self {
            min_moon_dist: 0.0,
            max_moon_dist: 180.0,
            min_elevation: 20.0,
            max_elevation: 90.0,
            max_magnitude: 5.0,
            sort_by: "elevation".to_string(),
            direction: SortDirection::Descending,
            no_cuts: false,
            check_proximity: -0.1,
        }
    }
}

impl RankingCriteria {
    pub fn sort_key(&self) -> Result<SortKey, String> {
        self.sort_by.parse()
    }
}

/// Whether a target survives the cuts. Bounds are exclusive; a missing
/// magnitude never fails the magnitude cut.
pub fn passes_cuts(target: &Target, criteria: &RankingCriteria) -> bool {
    if criteria.no_cuts {
        return true;
    }
    let el = target.elevation_deg;
    let moon = target.moon_dist_deg;
    el > criteria.min_elevation
        && el < criteria.max_elevation
        && moon > criteria.min_moon_dist
        && moon < criteria.max_moon_dist
        && target.magnitude.is_none_or(|m| m < criteria.max_magnitude)
}
