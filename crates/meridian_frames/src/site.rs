//! Observer site: geodetic position plus the evaluation instant.

use serde::Serialize;

use meridian_time::{UtcTime, gmst_rad, local_sidereal_time_rad};

use crate::error::FrameError;

/// Earth equatorial radius in meters (IAU 1976).
const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

/// Polar to equatorial radius ratio b/a (IAU 1976 flattening 1/298.257).
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

/// Where and when a report is evaluated.
///
/// Immutable for the duration of a run; [`ObserverSite::with_time`] is the
/// only way to move it to another instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverSite {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    time: UtcTime,
}

impl ObserverSite {
    /// Create a site. Latitude is north positive, longitude east positive.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        time: UtcTime,
    ) -> Result<Self, FrameError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(FrameError::InvalidSite("latitude must be in [-90, 90] degrees"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(FrameError::InvalidSite(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        if !elevation_m.is_finite() {
            return Err(FrameError::InvalidSite("elevation must be finite"));
        }
        if time.validate().is_err() {
            return Err(FrameError::InvalidSite("timestamp fields out of range"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            time,
        })
    }

    /// The same place at another instant.
    pub fn with_time(&self, time: UtcTime) -> Result<Self, FrameError> {
        Self::new(self.latitude_deg, self.longitude_deg, self.elevation_m, time)
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    pub fn time(&self) -> UtcTime {
        self.time
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Julian Date (UT) of the evaluation instant.
    pub fn jd_ut(&self) -> f64 {
        self.time.to_jd_utc()
    }

    /// Julian Date (TT) of the evaluation instant.
    pub fn jd_tt(&self) -> f64 {
        self.time.to_jd_tt()
    }

    /// The site's working epoch: the mean equinox of date.
    pub fn equinox_jd(&self) -> f64 {
        self.jd_tt()
    }

    /// Local mean sidereal time in radians [0, 2π).
    pub fn local_sidereal_time_rad(&self) -> f64 {
        local_sidereal_time_rad(gmst_rad(self.jd_ut(), self.jd_tt()), self.longitude_rad())
    }

    /// Geocentric position terms `(ρ sin φ′, ρ cos φ′)` in Earth equatorial radii.
    ///
    /// Source: Meeus, _Astronomical Algorithms_, Ch. 11.
    pub fn parallax_terms(&self) -> (f64, f64) {
        let phi = self.latitude_rad();
        let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
        let h = self.elevation_m / EARTH_EQUATORIAL_RADIUS_M;
        (
            EARTH_AXIS_RATIO * u.sin() + h * phi.sin(),
            u.cos() + h * phi.cos(),
        )
    }
}
