//! Doublet detection: nearest catalog neighbour of every target.
//!
//! A plain O(n²) double pass. Catalogs are tens to low hundreds of entries.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use meridian_frames::{EquatorialCoord, angular_separation_deg};

use crate::target::Target;

/// The closest other entry to a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbour {
    /// Index of the neighbour in the scanned slice.
    pub index: usize,
    pub name: String,
    pub separation_deg: f64,
}

/// Two targets closer together than the proximity threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityWarning {
    pub target: String,
    pub target_coord: EquatorialCoord,
    pub neighbour: String,
    pub neighbour_coord: EquatorialCoord,
    pub separation_deg: f64,
}

impl fmt::Display for ProximityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WARNING! These sources are very close! {} and {} are {} degrees from each other!\nRA: {} DEC: {} RA: {} DEC: {}",
            self.target,
            self.neighbour,
            self.separation_deg,
            self.target_coord.ra_rad(),
            self.target_coord.dec_rad(),
            self.neighbour_coord.ra_rad(),
            self.neighbour_coord.dec_rad(),
        )
    }
}

/// Index and separation of each coordinate's nearest other coordinate.
///
/// Ties go to the lowest index. A single coordinate has no neighbour.
pub fn nearest_indices(coords: &[EquatorialCoord]) -> Vec<Option<(usize, f64)>> {
    coords
        .iter()
        .enumerate()
        .map(|(i, a)| {
            coords
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, b)| (j, angular_separation_deg(a, b)))
                .fold(None, |best: Option<(usize, f64)>, (j, d)| match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((j, d)),
                })
        })
        .collect()
}

/// Fill in [`Target::nearest`] for every target in the slice.
pub fn nearest_neighbours(targets: &mut [Target]) {
    let coords: Vec<EquatorialCoord> = targets.iter().map(|t| t.coord).collect();
    let nearest = nearest_indices(&coords);
    let names: Vec<String> = targets.iter().map(|t| t.name.clone()).collect();
    for (target, found) in targets.iter_mut().zip(nearest) {
        target.nearest = found.map(|(index, separation_deg)| Neighbour {
            index,
            name: names[index].clone(),
            separation_deg,
        });
    }
}

/// Warnings for every target whose nearest neighbour is closer than
/// `threshold_deg`, in catalog order. A pair yields one warning from each side.
///
/// Expects [`nearest_neighbours`] to have been run over the same slice.
pub fn scan_proximity(targets: &[Target], threshold_deg: f64) -> Vec<ProximityWarning> {
    let mut warnings = Vec::new();
    for target in targets {
        let Some(n) = &target.nearest else {
            continue;
        };
        if n.separation_deg >= threshold_deg {
            continue;
        }
        let Some(other) = targets.get(n.index) else {
            continue;
        };
        warn!(
            target = %target.name,
            neighbour = %other.name,
            separation_deg = n.separation_deg,
            "sources closer than proximity threshold"
        );
        warnings.push(ProximityWarning {
            target: target.name.clone(),
            target_coord: target.coord,
            neighbour: other.name.clone(),
            neighbour_coord: other.coord,
            separation_deg: n.separation_deg,
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::ExposureHint;

    fn target(name: &str, ra: f64, dec: f64) -> Target {
        Target {
            name: name.into(),
            coord: EquatorialCoord::new(ra, dec).unwrap(),
            epoch: 2000.0,
            magnitude: None,
            elevation_deg: 45.0,
            azimuth_deg: 180.0,
            moon_dist_deg: 90.0,
            nearest: None,
            exposure: ExposureHint::Unavailable,
        }
    }

    #[test]
    fn single_target_has_no_neighbour() {
        let mut ts = vec![target("Solo", 1.0, 0.2)];
        nearest_neighbours(&mut ts);
        assert_eq!(ts[0].nearest, None);
        assert!(scan_proximity(&ts, 180.0).is_empty());
    }

    #[test]
    fn empty_catalog() {
        assert!(nearest_indices(&[]).is_empty());
    }

    #[test]
    fn close_pair_warns_both_ways() {
        let mut ts = vec![target("StarA", 0.0, 0.0), target("StarB", 0.0001, 0.0001)];
        nearest_neighbours(&mut ts);
        let d = ts[0].nearest_separation_deg().unwrap();
        assert!(d < 0.02, "d = {d}");
        assert_eq!(ts[0].nearest_separation_deg(), ts[1].nearest_separation_deg());

        let warnings = scan_proximity(&ts, 0.5);
        assert_eq!(warnings.len(), 2);
        assert_eq!((warnings[0].target.as_str(), warnings[0].neighbour.as_str()), ("StarA", "StarB"));
        assert_eq!((warnings[1].target.as_str(), warnings[1].neighbour.as_str()), ("StarB", "StarA"));
        assert!(warnings[0].to_string().starts_with(
            "WARNING! These sources are very close! StarA and StarB are "
        ));
    }

    #[test]
    fn negative_threshold_never_warns() {
        let mut ts = vec![target("A", 0.0, 0.0), target("B", 0.0, 0.0)];
        nearest_neighbours(&mut ts);
        assert!(scan_proximity(&ts, -0.1).is_empty());
        // Strictly below: an exact-zero separation at threshold 0 does not warn.
        assert!(scan_proximity(&ts, 0.0).is_empty());
    }

    #[test]
    fn exact_tie_is_deterministic() {
        let ts = [
            EquatorialCoord::new(1.0, 0.0).unwrap(),
            EquatorialCoord::new(2.0, 0.0).unwrap(),
            EquatorialCoord::new(2.0, 0.0).unwrap(),
        ];
        assert_eq!(nearest_indices(&ts)[0].map(|(i, _)| i), Some(1));
    }

    #[test]
    fn nearest_is_minimum_over_all_others() {
        let ts = [
            EquatorialCoord::new(0.0, 0.0).unwrap(),
            EquatorialCoord::new(0.5, 0.0).unwrap(),
            EquatorialCoord::new(0.1, 0.05).unwrap(),
            EquatorialCoord::new(3.0, -0.4).unwrap(),
        ];
        for (i, found) in nearest_indices(&ts).into_iter().enumerate() {
            let (j, d) = found.unwrap();
            assert_ne!(i, j);
            for (k, other) in ts.iter().enumerate() {
                if k != i {
                    assert!(d <= angular_separation_deg(&ts[i], other));
                }
            }
        }
    }
}
