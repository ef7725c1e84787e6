//! Horizontal-coordinate checks against known sky configurations.

use std::f64::consts::TAU;

use meridian_frames::{EquatorialCoord, ObserverSite, to_equinox_of_date, to_horizontal};
use meridian_time::UtcTime;

fn veritas(time: UtcTime) -> ObserverSite {
    ObserverSite::new(31.675_166_7, -110.952_2, 1268.0, time).unwrap()
}

/// Polaris sits at roughly the site latitude, due north, at any hour.
#[test]
fn polaris_elevation_tracks_latitude() {
    let ra = (2.0 + 31.0 / 60.0 + 49.09 / 3600.0) * 15.0_f64;
    let dec = 89.0 + 15.0 / 60.0 + 50.8 / 3600.0_f64;
    for hour in [0, 6, 12, 18] {
        let site = veritas(UtcTime::new(2024, 10, 1, hour, 0, 0.0));
        let hz = to_horizontal(&site, ra.to_radians(), dec.to_radians(), 2000.0).unwrap();
        assert!(
            (hz.elevation_deg - 31.675).abs() < 1.0,
            "hour {hour}: el = {}",
            hz.elevation_deg
        );
        assert!(
            hz.azimuth_deg < 2.0 || hz.azimuth_deg > 358.0,
            "hour {hour}: az = {}",
            hz.azimuth_deg
        );
    }
}

/// A star on the local meridian transits due south at 90° − (φ − δ).
#[test]
fn meridian_transit_elevation() {
    let site = veritas(UtcTime::new(2024, 3, 1, 6, 0, 0.0));
    let lst = site.local_sidereal_time_rad();
    let dec = 10.0_f64.to_radians();

    // Offset the J2000 RA by the precession shift so it lands on the meridian of date.
    let probe = EquatorialCoord::new(lst, dec).unwrap();
    let shift = to_equinox_of_date(&site, &probe, 2000.0).unwrap().ra_rad() - lst;
    let ra_j2000 = (lst - shift).rem_euclid(TAU);

    let target = EquatorialCoord::new(ra_j2000, dec).unwrap();
    let of_date = to_equinox_of_date(&site, &target, 2000.0).unwrap();
    let hz = to_horizontal(&site, ra_j2000, dec, 2000.0).unwrap();

    let expected = 90.0 - (31.675_166_7 - of_date.dec_deg());
    assert!((hz.elevation_deg - expected).abs() < 0.01, "el = {}", hz.elevation_deg);
    assert!((hz.azimuth_deg - 180.0).abs() < 0.5, "az = {}", hz.azimuth_deg);
}

#[test]
fn epoch_reassignment_matters_only_slightly() {
    let site = veritas(UtcTime::new(2024, 3, 1, 6, 0, 0.0));
    let a = to_horizontal(&site, 1.5, 0.4, 2000.0).unwrap();
    let b = to_horizontal(&site, 1.5, 0.4, 2024.0).unwrap();
    let dz = (a.elevation_deg - b.elevation_deg).abs();
    assert!(dz > 0.0 && dz < 0.5, "Δel = {dz}");
}
