//! Illuminated fraction of the lunar disk.
//!
//! Source: Meeus, _Astronomical Algorithms_, Ch. 48 (first method).

use meridian_frames::angular_separation_rad;

use crate::BodyPosition;

/// Phase angle (Sun–Moon–Earth) in radians [0, π].
pub fn phase_angle_rad(sun: &BodyPosition, moon: &BodyPosition) -> f64 {
    let elongation = angular_separation_rad(&sun.coord, &moon.coord);
    let r = sun.distance_km;
    (r * elongation.sin()).atan2(moon.distance_km - r * elongation.cos())
}

/// Fraction of the disk that is lit, in [0, 1].
pub fn illuminated_fraction(phase_angle_rad: f64) -> f64 {
    ((1.0 + phase_angle_rad.cos()) / 2.0).clamp(0.0, 1.0)
}
