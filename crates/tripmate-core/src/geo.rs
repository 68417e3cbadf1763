// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nearest-landmark lookup for the map view.
//!
//! Distances are planar over raw degrees. At city scale that ordering matches
//! great-circle ordering closely enough to pick the closest marker.

use crate::types::{Coordinate, Landmark};

/// Planar distance between two coordinates, in degrees.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    (a.lat - b.lat).hypot(a.lng - b.lng)
}

/// Returns the landmark closest to `current`, or `None` for an empty slice.
///
/// Ties keep the earlier landmark.
pub fn nearest(current: Coordinate, landmarks: &[Landmark]) -> Option<&Landmark> {
    let mut best: Option<(&Landmark, f64)> = None;
    for landmark in landmarks {
        let distance = planar_distance(current, landmark.position);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((landmark, distance)),
        }
    }
    best.map(|(landmark, _)| landmark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(name: &str, lat: f64, lng: f64) -> Landmark {
        Landmark {
            name: name.to_string(),
            category: "Monument".to_string(),
            position: Coordinate::new(lat, lng),
        }
    }

    #[test]
    fn empty_set_has_no_nearest() {
        assert!(nearest(Coordinate::new(41.0, 29.0), &[]).is_none());
    }

    #[test]
    fn picks_closest_marker() {
        let marks = vec![
            landmark("Galata Tower", 41.0256, 28.9744),
            landmark("Blue Mosque", 41.0053, 28.9769),
            landmark("Grand Bazaar", 41.0104, 28.9682),
        ];
        let found = nearest(Coordinate::new(41.0060, 28.9770), &marks).unwrap();
        assert_eq!(found.name, "Blue Mosque");
    }

    #[test]
    fn ties_keep_first() {
        let marks = vec![landmark("a", 1.0, 0.0), landmark("b", -1.0, 0.0)];
        let found = nearest(Coordinate::new(0.0, 0.0), &marks).unwrap();
        assert_eq!(found.name, "a");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(41.0, 28.0);
        let b = Coordinate::new(40.0, 29.0);
        assert_eq!(planar_distance(a, b), planar_distance(b, a));
        assert!((planar_distance(a, b) - 2f64.sqrt()).abs() < 1e-12);
    }
}
