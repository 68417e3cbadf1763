// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destination browsing commands: `countries`, `cities`, `tours`,
//! `attractions`, `coords`, and `nearest`.
//!
//! Gateway calls never fail; the only error path is output encoding.

use std::fmt::Write as _;

use serde::Serialize;
use tripmate_core::geo;
use tripmate_core::{Attraction, Coordinate, CountryList, Landmark, Tour, TripmateError};
use tripmate_gateway::{fixtures, RemoteGateway};

use crate::output::print_json;

/// Structured result of `tripmate nearest`.
#[derive(Debug, Serialize)]
pub struct NearestReport {
    pub from: Coordinate,
    pub landmark: Option<Landmark>,
    /// Planar distance in degrees.
    pub distance: Option<f64>,
}

pub async fn run_countries(gateway: &RemoteGateway, json: bool) -> Result<(), TripmateError> {
    let list = gateway.countries().await;
    if json {
        return print_json(&list);
    }
    print!("{}", format_countries(&list));
    Ok(())
}

pub async fn run_cities(
    gateway: &RemoteGateway,
    country: &str,
    json: bool,
) -> Result<(), TripmateError> {
    let cities = gateway.cities(country).await;
    if json {
        return print_json(&cities);
    }
    if cities.is_empty() {
        println!("no cities known for {country}");
    }
    for city in &cities {
        println!("{city}");
    }
    Ok(())
}

pub async fn run_tours(
    gateway: &RemoteGateway,
    country: Option<&str>,
    city: Option<&str>,
    json: bool,
) -> Result<(), TripmateError> {
    let tours = gateway.tours(country, city).await;
    if json {
        return print_json(&tours);
    }
    print!("{}", format_tours(&tours));
    Ok(())
}

pub async fn run_attractions(
    gateway: &RemoteGateway,
    country: Option<&str>,
    city: Option<&str>,
    json: bool,
) -> Result<(), TripmateError> {
    let attractions = gateway.attractions(country, city).await;
    if json {
        return print_json(&attractions);
    }
    print!("{}", format_attractions(&attractions));
    Ok(())
}

pub async fn run_coords(
    gateway: &RemoteGateway,
    city: &str,
    json: bool,
) -> Result<(), TripmateError> {
    let position = gateway.coordinates(city).await;
    if json {
        return print_json(&position);
    }
    println!("{city}: {:.4}, {:.4}", position.lat, position.lng);
    Ok(())
}

/// Closest fixture landmark to `from`. Purely local; the gateway is not used.
pub fn run_nearest(from: Coordinate, json: bool) -> Result<(), TripmateError> {
    let report = nearest_report(from, &fixtures::landmarks());
    if json {
        return print_json(&report);
    }
    match (&report.landmark, report.distance) {
        (Some(landmark), Some(distance)) => println!(
            "{} ({}) at {:.4}, {:.4}, {distance:.5}° away",
            landmark.name, landmark.category, landmark.position.lat, landmark.position.lng
        ),
        _ => println!("no landmarks to compare against"),
    }
    Ok(())
}

pub fn nearest_report(from: Coordinate, landmarks: &[Landmark]) -> NearestReport {
    let closest = geo::nearest(from, landmarks);
    NearestReport {
        from,
        distance: closest.map(|l| geo::planar_distance(from, l.position)),
        landmark: closest.cloned(),
    }
}

fn format_countries(list: &CountryList) -> String {
    let mut out = String::new();
    for country in &list.countries {
        let marker = if list.featured.contains(country) {
            " *"
        } else {
            ""
        };
        let _ = writeln!(out, "{country}{marker}");
    }
    out
}

fn format_tours(tours: &[Tour]) -> String {
    let mut out = String::new();
    for tour in tours {
        let _ = writeln!(
            out,
            "#{:<3} {:<28} {:<10} {}",
            tour.id, tour.name, tour.duration, tour.price
        );
    }
    out
}

fn format_attractions(attractions: &[Attraction]) -> String {
    let mut out = String::new();
    for attraction in attractions {
        let _ = writeln!(
            out,
            "#{:<3} {:<28} {:<12} {:.1}",
            attraction.id, attraction.name, attraction.category, attraction.rating
        );
    }
    out
}
