//! Geocentric → topocentric shift for nearby bodies.

use meridian_frames::{EquatorialCoord, ObserverSite};

use crate::{BodyPosition, EARTH_EQUATORIAL_RADIUS_KM};

/// Observer position in the equatorial frame of date, km.
fn observer_vector_km(site: &ObserverSite) -> [f64; 3] {
    let (rho_sin, rho_cos) = site.parallax_terms();
    let (sin_lst, cos_lst) = site.local_sidereal_time_rad().sin_cos();
    [
        EARTH_EQUATORIAL_RADIUS_KM * rho_cos * cos_lst,
        EARTH_EQUATORIAL_RADIUS_KM * rho_cos * sin_lst,
        EARTH_EQUATORIAL_RADIUS_KM * rho_sin,
    ]
}

/// Position of `body` as seen from `site` rather than from the geocentre.
///
/// `body` must be referred to the equinox of date. The shift is done by
/// vector subtraction, which is exact for any distance.
pub fn topocentric(body: &BodyPosition, site: &ObserverSite) -> BodyPosition {
    let u = body.coord.to_unit_vector();
    let obs = observer_vector_km(site);
    let v = [
        body.distance_km * u[0] - obs[0],
        body.distance_km * u[1] - obs[1],
        body.distance_km * u[2] - obs[2],
    ];
    BodyPosition {
        coord: EquatorialCoord::from_vector(&v),
        distance_km: (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt(),
    }
}
