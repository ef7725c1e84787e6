//! Great-circle angular separation.
//!
//! Uses the Vincenty form of the great-circle distance (atan2 of the cross
//! and dot products), which stays well conditioned for coincident and
//! antipodal points where the arccos and haversine forms lose precision.

use std::cmp::Ordering;

use crate::spherical::EquatorialCoord;

/// Angular separation between two directions, in radians [0, π].
///
/// Arguments are put in a canonical order before evaluation, so
/// `separation(a, b)` and `separation(b, a)` are bit-identical.
pub fn angular_separation_rad(a: &EquatorialCoord, b: &EquatorialCoord) -> f64 {
    let (p, q) = match a
        .ra_rad()
        .total_cmp(&b.ra_rad())
        .then(a.dec_rad().total_cmp(&b.dec_rad()))
    {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };

    let d_ra = q.ra_rad() - p.ra_rad();
    let (sin_dra, cos_dra) = d_ra.sin_cos();
    let (sin_d1, cos_d1) = p.dec_rad().sin_cos();
    let (sin_d2, cos_d2) = q.dec_rad().sin_cos();

    let x = cos_d2 * sin_dra;
    let y = cos_d1 * sin_d2 - sin_d1 * cos_d2 * cos_dra;
    let num = x.hypot(y);
    let den = sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra;
    num.atan2(den)
}

/// Angular separation between two directions, in degrees [0, 180].
pub fn angular_separation_deg(a: &EquatorialCoord, b: &EquatorialCoord) -> f64 {
    angular_separation_rad(a, b).to_degrees()
}
