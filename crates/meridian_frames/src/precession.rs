//! Equatorial precession between two epochs.
//!
//! Rigorous IAU 1976 precession (Lieske et al. 1977) in the angles ζ, z, θ
//! for an arbitrary starting epoch, as given in Meeus, _Astronomical
//! Algorithms_, Eq. 21.2–21.4. This is the only epoch adjustment the
//! engine applies: no nutation, aberration or proper motion.

use std::f64::consts::PI;

use meridian_time::DAYS_PER_JULIAN_CENTURY;
use meridian_time::J2000_JD;

use crate::spherical::EquatorialCoord;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Precession angles `(ζ, z, θ)` in radians from `from_jd` to `to_jd`.
pub fn precession_angles(from_jd: f64, to_jd: f64) -> (f64, f64, f64) {
    let big_t = (from_jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t = (to_jd - from_jd) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let base = 2306.2181 + 1.39656 * big_t - 0.000139 * big_t * big_t;
    let zeta = base * t + (0.30188 - 0.000344 * big_t) * t2 + 0.017998 * t3;
    let z = base * t + (1.09468 + 0.000066 * big_t) * t2 + 0.018203 * t3;
    let theta = (2004.3109 - 0.85330 * big_t - 0.000217 * big_t * big_t) * t
        - (0.42665 + 0.000217 * big_t) * t2
        - 0.041833 * t3;

    (
        zeta * ARCSEC_TO_RAD,
        z * ARCSEC_TO_RAD,
        theta * ARCSEC_TO_RAD,
    )
}

/// Precess a mean equatorial position from the equinox of `from_jd` to the
/// equinox of `to_jd`.
///
/// Returns the input unchanged when both epochs are equal.
pub fn precess(coord: &EquatorialCoord, from_jd: f64, to_jd: f64) -> EquatorialCoord {
    if from_jd == to_jd {
        return *coord;
    }

    let (zeta, z, theta) = precession_angles(from_jd, to_jd);
    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_d0, cos_d0) = coord.dec_rad().sin_cos();
    let (sin_a, cos_a) = (coord.ra_rad() + zeta).sin_cos();

    let a = cos_d0 * sin_a;
    let b = cos_th * cos_d0 * cos_a - sin_th * sin_d0;
    let c = sin_th * cos_d0 * cos_a + cos_th * sin_d0;

    EquatorialCoord::wrapped(a.atan2(b) + z, c.atan2(a.hypot(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_time::julian_year_to_jd;

    fn hms(h: f64, m: f64, s: f64) -> f64 {
        (h + m / 60.0 + s / 3600.0) * 15.0
    }

    fn dms(d: f64, m: f64, s: f64) -> f64 {
        d.signum() * (d.abs() + m / 60.0 + s / 3600.0)
    }

    #[test]
    fn identity_when_epochs_match() {
        let c = EquatorialCoord::new(1.234, 0.567).unwrap();
        let p = precess(&c, J2000_JD, J2000_JD);
        assert_eq!(p, c);
    }

    #[test]
    fn meeus_example_21b() {
        // θ Persei, proper motion already applied, J2000.0 → 2028 Nov 13.19 TD
        let c = EquatorialCoord::new(
            hms(2.0, 44.0, 12.975).to_radians(),
            dms(49.0, 13.0, 39.90).to_radians(),
        )
        .unwrap();
        let p = precess(&c, J2000_JD, 2_462_088.69);
        let ra_expected = hms(2.0, 46.0, 11.331);
        let dec_expected = dms(49.0, 20.0, 54.54);
        assert!((p.ra_deg() - ra_expected).abs() < 1e-4, "ra = {}", p.ra_deg());
        assert!((p.dec_deg() - dec_expected).abs() < 1e-4, "dec = {}", p.dec_deg());
    }

    #[test]
    fn forward_then_back_recovers_position() {
        let c = EquatorialCoord::new(5.9, -1.1).unwrap();
        let to = julian_year_to_jd(2030.0);
        let back = precess(&precess(&c, J2000_JD, to), to, J2000_JD);
        assert!((back.ra_rad() - c.ra_rad()).abs() < 1e-9);
        assert!((back.dec_rad() - c.dec_rad()).abs() < 1e-9);
    }

    #[test]
    fn annual_rate_near_equinox() {
        // A star at RA 0, Dec 0 drifts ~3.07 s of RA and ~20" of Dec per year.
        let c = EquatorialCoord::new(0.0, 0.0).unwrap();
        let p = precess(&c, J2000_JD, julian_year_to_jd(2001.0));
        let dra_s = p.ra_deg() * 240.0;
        let ddec_arcsec = p.dec_deg() * 3600.0;
        assert!((dra_s - 3.075).abs() < 0.01, "dRA = {dra_s} s");
        assert!((ddec_arcsec - 20.04).abs() < 0.05, "dDec = {ddec_arcsec}\"");
    }

    #[test]
    fn angles_vanish_for_zero_interval() {
        let (zeta, z, theta) = precession_angles(2_451_000.0, 2_451_000.0);
        assert_eq!((zeta, z, theta), (0.0, 0.0, 0.0));
    }
}
