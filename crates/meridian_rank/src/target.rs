//! Per-target astrometry against a fixed site and Moon.

use serde::Serialize;

use meridian_ephem::MoonState;
use meridian_frames::{
    EquatorialCoord, ObserverSite, angular_separation_deg, horizontal_of_date, to_equinox_of_date,
};

use crate::catalog::CatalogRow;
use crate::error::RankError;
use crate::exposure::{ExposureHint, exposure_for, magnitude_from_name};
use crate::proximity::Neighbour;

/// A catalog entry with everything the report shows about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pub name: String,
    /// Catalog coordinates at `epoch`.
    pub coord: EquatorialCoord,
    pub epoch: f64,
    pub magnitude: Option<f64>,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub moon_dist_deg: f64,
    /// Closest other catalog entry; `None` when the catalog has one target.
    pub nearest: Option<Neighbour>,
    pub exposure: ExposureHint,
}

impl Target {
    /// Separation to the nearest neighbour, if there is one.
    pub fn nearest_separation_deg(&self) -> Option<f64> {
        self.nearest.as_ref().map(|n| n.separation_deg)
    }
}

/// Compute elevation, azimuth and Moon distance for one row.
///
/// The row's coordinates are reassigned to the site's equinox of date before
/// both the horizontal transform and the Moon comparison. `nearest` is left
/// empty; the proximity scan fills it in once all targets are known.
pub fn observe(
    row: &CatalogRow,
    site: &ObserverSite,
    moon: &MoonState,
) -> Result<Target, RankError> {
    let invalid = |reason: String| RankError::InvalidCoordinate {
        name: row.name.clone(),
        reason,
    };
    let coord = EquatorialCoord::new(row.ra_rad, row.dec_rad).map_err(|e| invalid(e.to_string()))?;
    let of_date = to_equinox_of_date(site, &coord, row.epoch).map_err(|e| invalid(e.to_string()))?;

    let hz = horizontal_of_date(site, &of_date);
    let magnitude = magnitude_from_name(&row.name);

    Ok(Target {
        name: row.name.clone(),
        coord,
        epoch: row.epoch,
        magnitude,
        elevation_deg: hz.elevation_deg,
        azimuth_deg: hz.azimuth_deg,
        moon_dist_deg: angular_separation_deg(&moon.coord(), &of_date),
        nearest: None,
        exposure: exposure_for(magnitude),
    })
}
