//! Equatorial → horizontal (elevation/azimuth) transform.
//!
//! Geometric only: no atmospheric refraction. Azimuth is measured from
//! north through east.

use serde::Serialize;

use meridian_time::{hour_angle_rad, julian_year_to_jd};

use crate::error::FrameError;
use crate::precession::precess;
use crate::site::ObserverSite;
use crate::spherical::EquatorialCoord;

/// Local horizontal position, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizontal {
    /// Elevation above the horizon, [−90, 90].
    pub elevation_deg: f64,
    /// Azimuth from north through east, [0, 360).
    pub azimuth_deg: f64,
}

/// Horizontal position for a given hour angle and declination at latitude
/// `latitude_rad`.
pub fn horizontal_from_hour_angle(ha_rad: f64, dec_rad: f64, latitude_rad: f64) -> Horizontal {
    let (sin_h, cos_h) = ha_rad.sin_cos();
    let (sin_d, cos_d) = dec_rad.sin_cos();
    let (sin_p, cos_p) = latitude_rad.sin_cos();

    let north = sin_d * cos_p - cos_d * sin_p * cos_h;
    let east = -cos_d * sin_h;
    let up = sin_p * sin_d + cos_p * cos_d * cos_h;

    let mut azimuth_deg = east.atan2(north).to_degrees().rem_euclid(360.0);
    if azimuth_deg >= 360.0 {
        azimuth_deg = 0.0;
    }

    Horizontal {
        elevation_deg: up.atan2(north.hypot(east)).to_degrees(),
        azimuth_deg,
    }
}

/// Horizontal position of a catalog coordinate referred to `epoch_year`
/// (Julian epoch, e.g. 2000.0), as seen from `site`.
///
/// The coordinate is first precessed to the site's equinox of date.
pub fn horizontal_of(
    site: &ObserverSite,
    coord: &EquatorialCoord,
    epoch_year: f64,
) -> Result<Horizontal, FrameError> {
    let of_date = to_equinox_of_date(site, coord, epoch_year)?;
    Ok(horizontal_of_date(site, &of_date))
}

/// Horizontal position of a coordinate already referred to the site's
/// equinox of date.
pub fn horizontal_of_date(site: &ObserverSite, of_date: &EquatorialCoord) -> Horizontal {
    let ha = hour_angle_rad(site.local_sidereal_time_rad(), of_date.ra_rad());
    horizontal_from_hour_angle(ha, of_date.dec_rad(), site.latitude_rad())
}

/// Validate a raw RA/Dec pair (radians) and transform it to horizontal
/// coordinates. Fails with [`FrameError::InvalidCoordinate`] for
/// non-finite or out-of-range input.
pub fn to_horizontal(
    site: &ObserverSite,
    ra_rad: f64,
    dec_rad: f64,
    epoch_year: f64,
) -> Result<Horizontal, FrameError> {
    let coord = EquatorialCoord::new(ra_rad, dec_rad)?;
    horizontal_of(site, &coord, epoch_year)
}

/// Reassign a catalog coordinate from its own epoch to the site's working
/// epoch (mean equinox of date).
pub fn to_equinox_of_date(
    site: &ObserverSite,
    coord: &EquatorialCoord,
    epoch_year: f64,
) -> Result<EquatorialCoord, FrameError> {
    if !epoch_year.is_finite() {
        return Err(FrameError::InvalidEpoch(epoch_year));
    }
    Ok(precess(coord, julian_year_to_jd(epoch_year), site.equinox_jd()))
}
