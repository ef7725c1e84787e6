//! Analytic Sun and Moon ephemeris for target ranking.
//!
//! Low-precision series (Meeus) are enough for moon-distance cuts and the
//! illumination line of a report; no kernel files are needed.

pub mod error;
pub mod illumination;
pub mod moon;
pub mod sun;
pub mod topocentric;

use serde::Serialize;
use tracing::debug;

use meridian_frames::{EquatorialCoord, ObserverSite};
use meridian_time::jd_to_julian_year;

pub use error::EphemerisError;
pub use illumination::{illuminated_fraction, phase_angle_rad};
pub use moon::{moon_ecliptic, moon_geocentric};
pub use sun::sun_position;
pub use topocentric::topocentric;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Earth equatorial radius in km (IAU 1976).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// First and last calendar years the series are trusted for.
pub const SUPPORTED_YEARS: (i32, i32) = (1000, 3000);

/// Direction and distance of a body, equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub coord: EquatorialCoord,
    pub distance_km: f64,
}

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries (TT)
/// from J2000 (Meeus 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + arcsec / 60.0) / 60.0
}

/// Rotate ecliptic longitude/latitude (radians) onto the equator.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, obliquity_rad: f64) -> EquatorialCoord {
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let (sin_b, cos_b) = lat_rad.sin_cos();
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    let x = cos_b * cos_l;
    let y = cos_b * sin_l;
    let z = sin_b;
    EquatorialCoord::from_vector(&[x, y * cos_e - z * sin_e, y * sin_e + z * cos_e])
}

/// The Moon as seen from a site at its evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonState {
    /// Topocentric RA, equinox of date.
    pub ra_rad: f64,
    /// Topocentric Dec, equinox of date.
    pub dec_rad: f64,
    /// Topocentric distance.
    pub distance_km: f64,
    /// Lit fraction of the disk, [0, 1].
    pub illuminated_fraction: f64,
    /// Sun–Moon–Earth angle, [0, 180].
    pub phase_angle_deg: f64,
    #[serde(skip)]
    coord: EquatorialCoord,
}

impl MoonState {
    /// Topocentric direction, usable directly with separation helpers.
    pub fn coord(&self) -> EquatorialCoord {
        self.coord
    }

    pub fn illuminated_percent(&self) -> f64 {
        self.illuminated_fraction * 100.0
    }
}

/// Evaluate the Moon for `site`.
///
/// Fails if the instant is outside [`SUPPORTED_YEARS`] or the series
/// degenerate.
pub fn compute_moon(site: &ObserverSite) -> Result<MoonState, EphemerisError> {
    let jd_tt = site.jd_tt();
    let year = jd_to_julian_year(jd_tt);
    let (min_year, max_year) = SUPPORTED_YEARS;
    if !year.is_finite() || year < min_year as f64 || year >= (max_year + 1) as f64 {
        return Err(EphemerisError::OutOfRange {
            jd_tt,
            min_year,
            max_year,
        });
    }

    let sun = sun_position(jd_tt);
    let geocentric = moon_geocentric(jd_tt);
    if !geocentric.distance_km.is_finite() || !sun.distance_km.is_finite() {
        return Err(EphemerisError::NonFinite("distance"));
    }
    let topo = topocentric(&geocentric, site);

    let phase = phase_angle_rad(&sun, &geocentric);
    if !phase.is_finite() {
        return Err(EphemerisError::NonFinite("phase angle"));
    }
    let state = MoonState {
        ra_rad: topo.coord.ra_rad(),
        dec_rad: topo.coord.dec_rad(),
        distance_km: topo.distance_km,
        illuminated_fraction: illuminated_fraction(phase),
        phase_angle_deg: phase.to_degrees(),
        coord: topo.coord,
    };
    debug!(
        jd_tt,
        ra_deg = state.coord.ra_deg(),
        dec_deg = state.coord.dec_deg(),
        illuminated = state.illuminated_fraction,
        "moon evaluated"
    );
    Ok(state)
}
