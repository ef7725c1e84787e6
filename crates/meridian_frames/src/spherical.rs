//! Equatorial coordinates on the unit sphere.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::error::FrameError;

/// A validated right ascension / declination pair, both in radians.
///
/// RA ∈ [0, 2π), Dec ∈ [−π/2, π/2].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialCoord {
    ra_rad: f64,
    dec_rad: f64,
}

impl EquatorialCoord {
    /// Validate and wrap a coordinate pair.
    pub fn new(ra_rad: f64, dec_rad: f64) -> Result<Self, FrameError> {
        let valid = ra_rad.is_finite()
            && dec_rad.is_finite()
            && (0.0..TAU).contains(&ra_rad)
            && (-FRAC_PI_2..=FRAC_PI_2).contains(&dec_rad);
        if !valid {
            return Err(FrameError::InvalidCoordinate { ra_rad, dec_rad });
        }
        Ok(Self { ra_rad, dec_rad })
    }

    /// Build from angles that are known to be well formed but may sit just
    /// outside the canonical range (e.g. computed RA of −1e-17).
    pub(crate) fn wrapped(ra_rad: f64, dec_rad: f64) -> Self {
        let mut ra = ra_rad.rem_euclid(TAU);
        if ra >= TAU {
            ra = 0.0;
        }
        Self {
            ra_rad: ra,
            dec_rad: dec_rad.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }

    pub fn ra_rad(&self) -> f64 {
        self.ra_rad
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_rad
    }

    pub fn ra_deg(&self) -> f64 {
        self.ra_rad.to_degrees()
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_rad.to_degrees()
    }

    /// Unit vector `[x, y, z]` with +x toward RA 0, +z toward the pole.
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let (sin_ra, cos_ra) = self.ra_rad.sin_cos();
        let (sin_dec, cos_dec) = self.dec_rad.sin_cos();
        [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
    }

    /// Direction of a (not necessarily normalised) vector.
    ///
    /// The zero vector maps to RA 0, Dec 0.
    pub fn from_vector(xyz: &[f64; 3]) -> Self {
        let [x, y, z] = *xyz;
        let rxy = x.hypot(y);
        if rxy == 0.0 && z == 0.0 {
            return Self {
                ra_rad: 0.0,
                dec_rad: 0.0,
            };
        }
        Self::wrapped(y.atan2(x), z.atan2(rxy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn accepts_canonical_range() {
        assert!(EquatorialCoord::new(0.0, 0.0).is_ok());
        assert!(EquatorialCoord::new(TAU - 1e-9, FRAC_PI_2).is_ok());
        assert!(EquatorialCoord::new(3.0, -FRAC_PI_2).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(EquatorialCoord::new(TAU, 0.0).is_err());
        assert!(EquatorialCoord::new(-0.1, 0.0).is_err());
        assert!(EquatorialCoord::new(1.0, 1.6).is_err());
        assert!(EquatorialCoord::new(f64::NAN, 0.0).is_err());
        assert!(EquatorialCoord::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_carries_values() {
        let err = EquatorialCoord::new(7.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidCoordinate {
                ra_rad: 7.0,
                dec_rad: 0.5
            }
        );
    }

    #[test]
    fn unit_vector_axes() {
        let c = EquatorialCoord::new(FRAC_PI_2, 0.0).unwrap();
        let v = c.to_unit_vector();
        assert!(v[0].abs() < EPS && (v[1] - 1.0).abs() < EPS && v[2].abs() < EPS);

        let pole = EquatorialCoord::new(0.0, FRAC_PI_2).unwrap();
        assert!((pole.to_unit_vector()[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn vector_roundtrip() {
        let c = EquatorialCoord::new(4.1, -0.7).unwrap();
        let back = EquatorialCoord::from_vector(&c.to_unit_vector());
        assert!((back.ra_rad() - 4.1).abs() < EPS);
        assert!((back.dec_rad() + 0.7).abs() < EPS);
    }

    #[test]
    fn from_vector_scales_out() {
        let c = EquatorialCoord::from_vector(&[-2.0, -2.0, 0.0]);
        assert!((c.ra_deg() - 225.0).abs() < EPS);
        assert_eq!(c.dec_rad(), 0.0);
    }

    #[test]
    fn zero_vector() {
        let c = EquatorialCoord::from_vector(&[0.0, 0.0, 0.0]);
        assert_eq!((c.ra_rad(), c.dec_rad()), (0.0, 0.0));
    }

    #[test]
    fn wrapped_normalises_tiny_negative_ra() {
        let c = EquatorialCoord::wrapped(-1e-300, 0.0);
        assert!((0.0..TAU).contains(&c.ra_rad()));
    }
}
