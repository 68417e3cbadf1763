// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static fallback dataset.
//!
//! Served in mock mode and whenever a live request fails. The data never
//! changes and is not a cache of earlier live responses; filters passed to
//! tours and attractions are ignored.

use tripmate_core::{Attraction, Coordinate, CountryList, Landmark, Tour};

use crate::wire::{CoordinateEntry, CoordinatesResponse};

/// Returned when a coordinates response carries no entries.
pub const DEFAULT_COORDINATE: Coordinate = Coordinate::new(41.0082, 28.9784);

const COUNTRIES: [&str; 5] = ["Turkey", "Italy", "Spain", "Greece", "France"];
const FEATURED: [&str; 2] = ["Turkey", "Italy"];

const CITIES: [(&str, [&str; 4]); 5] = [
    ("Turkey", ["Istanbul", "Ankara", "Izmir", "Antalya"]),
    ("Italy", ["Rome", "Milan", "Naples", "Florence"]),
    ("Spain", ["Madrid", "Barcelona", "Valencia", "Seville"]),
    ("Greece", ["Athens", "Thessaloniki", "Patras", "Rhodes"]),
    ("France", ["Paris", "Lyon", "Marseille", "Nice"]),
];

const TOURS: [(i64, &str, &str, &str); 3] = [
    (1, "Historical City Walk", "3 hours", "$25"),
    (2, "Food & Culture Tour", "4 hours", "$45"),
    (3, "Sunset Photography Tour", "2 hours", "$30"),
];

const ATTRACTIONS: [(i64, &str, &str, f64); 3] = [
    (1, "Historic Center", "Historical", 4.8),
    (2, "Local Market", "Cultural", 4.5),
    (3, "Scenic Viewpoint", "Nature", 4.7),
];

const LANDMARKS: [(&str, &str, f64, f64); 5] = [
    ("Hagia Sophia", "Church", 41.0086, 28.9800),
    ("Blue Mosque", "Museum", 41.0053, 28.9769),
    ("Topkapi Palace", "Palace", 41.0116, 28.9834),
    ("Grand Bazaar", "Shop", 41.0104, 28.9682),
    ("Galata Tower", "Monument", 41.0256, 28.9744),
];

pub fn countries() -> CountryList {
    CountryList {
        countries: COUNTRIES.iter().map(|c| c.to_string()).collect(),
        featured: FEATURED.iter().map(|c| c.to_string()).collect(),
    }
}

/// Cities of `country` (exact, case-sensitive name). Unknown countries yield
/// an empty list.
pub fn cities(country: &str) -> Vec<String> {
    CITIES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| cities.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default()
}

pub fn tours() -> Vec<Tour> {
    TOURS
        .iter()
        .map(|&(id, name, duration, price)| Tour {
            id,
            name: name.to_string(),
            duration: duration.to_string(),
            price: price.to_string(),
        })
        .collect()
}

pub fn attractions() -> Vec<Attraction> {
    ATTRACTIONS
        .iter()
        .map(|&(id, name, category, rating)| Attraction {
            id,
            name: name.to_string(),
            category: category.to_string(),
            rating,
        })
        .collect()
}

/// One entry at the default coordinate, regardless of the requested city.
pub fn coordinates() -> CoordinatesResponse {
    CoordinatesResponse {
        coordinates: vec![CoordinateEntry {
            city: "Istanbul".to_string(),
            name: "Example Location".to_string(),
            x: DEFAULT_COORDINATE.lat,
            y: DEFAULT_COORDINATE.lng,
        }],
    }
}

/// Map markers around Istanbul's historic peninsula.
pub fn landmarks() -> Vec<Landmark> {
    LANDMARKS
        .iter()
        .map(|&(name, category, lat, lng)| Landmark {
            name: name.to_string(),
            category: category.to_string(),
            position: Coordinate::new(lat, lng),
        })
        .collect()
}
