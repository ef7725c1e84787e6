//! Low-precision solar coordinates.
//!
//! Source: Meeus, _Astronomical Algorithms_, Ch. 25 (accuracy ~0.01°).

use meridian_time::julian_centuries;

use crate::{AU_KM, BodyPosition, ecliptic_to_equatorial, mean_obliquity_deg};

/// Apparent geocentric position of the Sun, mean equator and equinox of date.
pub fn sun_position(jd_tt: f64) -> BodyPosition {
    let t = julian_centuries(jd_tt);

    let l0 = 280.46646 + t * (36_000.76983 + t * 0.0003032);
    let m = (357.52911 + t * (35_999.05029 - t * 0.0001537)).to_radians();
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_lon = true_lon - 0.00569 - 0.00478 * omega.sin();
    let eps = mean_obliquity_deg(t) + 0.00256 * omega.cos();

    BodyPosition {
        coord: ecliptic_to_equatorial(
            apparent_lon.to_radians(),
            0.0,
            eps.to_radians(),
        ),
        distance_km: r_au * AU_KM,
    }
}
