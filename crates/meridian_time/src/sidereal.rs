//! Earth Rotation Angle, Greenwich and local mean sidereal time.
//!
//! All functions take UT Julian Dates. No EOP table is applied, so UT1 is
//! taken equal to UTC; the resulting error (< 0.9 s of time) is far below
//! what elevation/azimuth ranking needs.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Ratio of sidereal to solar rotation rate.
const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle at a UT Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the day count so the fractional turn keeps full precision.
    let frac = du.rem_euclid(1.0);
    let turns = 0.779_057_273_264_0 + frac + (SIDEREAL_RATE - 1.0) * du;
    (TAU * turns).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a UT Julian Date, radians in [0, 2π).
///
/// `jd_tt` drives the precession polynomial; passing the UT date instead
/// changes the result by well under a milliarcsecond.
pub fn gmst_rad(jd_ut: f64, jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time for an observer at `longitude_east_rad`.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Hour angle of a right ascension at a given local sidereal time,
/// normalised to (−π, π].
pub fn hour_angle_rad(lst: f64, ra: f64) -> f64 {
    let ha = (lst - ra).rem_euclid(TAU);
    if ha > PI { ha - TAU } else { ha }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.01, "ERA = {deg}");
    }

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 52.27s ≈ 99.9678°
        let jd = 2_451_544.5;
        let deg = gmst_rad(jd, jd).to_degrees();
        assert!((deg - 99.9678).abs() < 0.001, "GMST = {deg}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 Apr 10, 0h UT: GMST = 13h 10m 46.3668s = 197.693195°
        let jd = 2_446_895.5;
        let deg = gmst_rad(jd, jd).to_degrees();
        assert!((deg - 197.693195).abs() < 0.001, "GMST = {deg}");
    }

    #[test]
    fn lst_wraps_west_longitudes() {
        let lst = local_sidereal_time_rad(0.1, -0.5);
        assert!((0.0..TAU).contains(&lst));
        assert!((lst - (TAU - 0.4)).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_range() {
        assert!((hour_angle_rad(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
        assert!((hour_angle_rad(TAU - 0.1, 0.1) + 0.2).abs() < 1e-12);
        assert_eq!(hour_angle_rad(1.0, 1.0), 0.0);
    }

    #[test]
    fn sidereal_day_is_shorter_than_solar_day() {
        // One solar day later the ERA has advanced by ~0.9856°.
        let a = earth_rotation_angle_rad(2_460_000.5);
        let b = earth_rotation_angle_rad(2_460_001.5);
        let advance = (b - a).rem_euclid(TAU).to_degrees();
        assert!((advance - 0.9856).abs() < 0.001, "advance = {advance}");
    }
}
