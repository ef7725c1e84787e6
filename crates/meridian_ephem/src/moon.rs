//! Geocentric lunar coordinates from a truncated lunar theory.
//!
//! Periodic terms are the leading entries of Meeus, _Astronomical
//! Algorithms_, Tables 47.A and 47.B (Chapront ELP-2000/82 fit). With the
//! terms kept here the position is good to roughly 0.01° in longitude and
//! 50 km in distance.

use meridian_time::julian_centuries;

use crate::{BodyPosition, ecliptic_to_equatorial, mean_obliquity_deg};

/// Mean Earth–Moon distance constant of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// One periodic term: multipliers of (D, M, M′, F) and the coefficient
/// (1e-6 degree for longitude/latitude, 1e-3 km for distance).
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> Term {
    Term { d, m, mp, f, coeff }
}

const LONGITUDE_TERMS: [Term; 34] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),
    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),
    term(0, 2, 0, 0, -2_069.0),
];

const DISTANCE_TERMS: [Term; 34] = [
    term(0, 0, 1, 0, -20_905_355.0),
    term(2, 0, -1, 0, -3_699_111.0),
    term(2, 0, 0, 0, -2_955_968.0),
    term(0, 0, 2, 0, -569_925.0),
    term(0, 1, 0, 0, 48_888.0),
    term(0, 0, 0, 2, -3_149.0),
    term(2, 0, -2, 0, 246_158.0),
    term(2, -1, -1, 0, -152_138.0),
    term(2, 0, 1, 0, -170_733.0),
    term(2, -1, 0, 0, -204_586.0),
    term(0, 1, -1, 0, -129_620.0),
    term(1, 0, 0, 0, 108_743.0),
    term(0, 1, 1, 0, 104_755.0),
    term(2, 0, 0, -2, 10_321.0),
    term(0, 0, 1, -2, 79_661.0),
    term(4, 0, -1, 0, -34_782.0),
    term(0, 0, 3, 0, -23_210.0),
    term(4, 0, -2, 0, -21_636.0),
    term(2, 1, -1, 0, 24_208.0),
    term(2, 1, 0, 0, 30_824.0),
    term(1, 0, -1, 0, -8_379.0),
    term(1, 1, 0, 0, -16_675.0),
    term(2, -1, 1, 0, -12_831.0),
    term(2, 0, 2, 0, -10_445.0),
    term(4, 0, 0, 0, -11_650.0),
    term(2, 0, -3, 0, 14_403.0),
    term(0, 1, -2, 0, -7_003.0),
    term(2, -1, -2, 0, 10_056.0),
    term(1, 0, 1, 0, 6_322.0),
    term(2, -2, 0, 0, -9_884.0),
    term(0, 1, 2, 0, 5_751.0),
    term(2, -2, -1, 0, -4_950.0),
    term(2, 0, 1, -2, 4_130.0),
    term(4, -1, -1, 0, -3_958.0),
];

const LATITUDE_TERMS: [Term; 20] = [
    term(0, 0, 0, 1, 5_128_122.0),
    term(0, 0, 1, 1, 280_602.0),
    term(0, 0, 1, -1, 277_693.0),
    term(2, 0, 0, -1, 173_237.0),
    term(2, 0, -1, 1, 55_413.0),
    term(2, 0, -1, -1, 46_271.0),
    term(2, 0, 0, 1, 32_573.0),
    term(0, 0, 2, 1, 17_198.0),
    term(2, 0, 1, -1, 9_266.0),
    term(0, 0, 2, -1, 8_822.0),
    term(2, -1, 0, -1, 8_216.0),
    term(2, 0, -2, -1, 4_324.0),
    term(2, 0, 1, 1, 4_200.0),
    term(2, 1, 0, -1, -3_359.0),
    term(2, -1, -1, 1, 2_463.0),
    term(2, -1, 0, 1, 2_211.0),
    term(2, -1, -1, -1, 2_065.0),
    term(0, 1, -1, -1, -1_870.0),
    term(4, 0, -1, -1, 1_828.0),
    term(0, 1, 0, 1, -1_794.0),
];

/// Fundamental arguments in radians.
struct Arguments {
    l_prime: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    /// Eccentricity factor applied to terms in M.
    e: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let deg = |x: f64| x.rem_euclid(360.0).to_radians();
        Self {
            l_prime: deg(
                218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            d: deg(
                297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            m: deg(357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0),
            m_prime: deg(
                134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            f: deg(
                93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }

    fn angle(&self, term: &Term) -> f64 {
        term.d as f64 * self.d
            + term.m as f64 * self.m
            + term.mp as f64 * self.m_prime
            + term.f as f64 * self.f
    }

    fn eccentricity_factor(&self, term: &Term) -> f64 {
        match term.m.abs() {
            1 => self.e,
            2 => self.e * self.e,
            _ => 1.0,
        }
    }

    fn sum_sin(&self, terms: &[Term]) -> f64 {
        terms
            .iter()
            .map(|t| t.coeff * self.eccentricity_factor(t) * self.angle(t).sin())
            .sum()
    }

    fn sum_cos(&self, terms: &[Term]) -> f64 {
        terms
            .iter()
            .map(|t| t.coeff * self.eccentricity_factor(t) * self.angle(t).cos())
            .sum()
    }
}

/// Geocentric ecliptic longitude, latitude (radians, mean equinox of date)
/// and distance (km).
pub fn moon_ecliptic(jd_tt: f64) -> (f64, f64, f64) {
    let t = julian_centuries(jd_tt);
    let args = Arguments::at(t);

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();

    let sum_l = args.sum_sin(&LONGITUDE_TERMS)
        + 3958.0 * a1.sin()
        + 1962.0 * (args.l_prime - args.f).sin()
        + 318.0 * a2.sin();

    let sum_b = args.sum_sin(&LATITUDE_TERMS) - 2235.0 * args.l_prime.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - args.f).sin()
        + 175.0 * (a1 + args.f).sin()
        + 127.0 * (args.l_prime - args.m_prime).sin()
        - 115.0 * (args.l_prime + args.m_prime).sin();

    let sum_r = args.sum_cos(&DISTANCE_TERMS);

    let lon = (args.l_prime.to_degrees() + sum_l / 1e6).rem_euclid(360.0);
    let lat = sum_b / 1e6;
    (
        lon.to_radians(),
        lat.to_radians(),
        MEAN_DISTANCE_KM + sum_r / 1000.0,
    )
}

/// Geocentric position of the Moon, mean equator and equinox of date.
pub fn moon_geocentric(jd_tt: f64) -> BodyPosition {
    let (lon, lat, distance_km) = moon_ecliptic(jd_tt);
    let eps = mean_obliquity_deg(julian_centuries(jd_tt)).to_radians();
    BodyPosition {
        coord: ecliptic_to_equatorial(lon, lat, eps),
        distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus example 47.a: 1992 Apr 12.0 TD.
    const JD: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_47a_ecliptic() {
        let (lon, lat, dist) = moon_ecliptic(JD);
        assert!((lon.to_degrees() - 133.162655).abs() < 0.01, "λ = {}", lon.to_degrees());
        assert!((lat.to_degrees() + 3.229126).abs() < 0.01, "β = {}", lat.to_degrees());
        assert!((dist - 368_409.7).abs() < 50.0, "Δ = {dist}");
    }

    #[test]
    fn meeus_example_47a_equatorial() {
        // Apparent α = 134.688470°, δ = 13.768368° (includes nutation, ~0.005°)
        let moon = moon_geocentric(JD);
        assert!((moon.coord.ra_deg() - 134.688470).abs() < 0.02, "α = {}", moon.coord.ra_deg());
        assert!((moon.coord.dec_deg() - 13.768368).abs() < 0.02, "δ = {}", moon.coord.dec_deg());
    }

    #[test]
    fn distance_stays_in_orbit_bounds() {
        for k in 0..60 {
            let (_, lat, dist) = moon_ecliptic(2_460_000.5 + k as f64 * 0.5);
            assert!((356_000.0..407_000.0).contains(&dist), "Δ = {dist}");
            assert!(lat.to_degrees().abs() < 5.4);
        }
    }
}
