// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote data gateway for Tripmate.
//!
//! Fetches countries, cities, tours, attractions, and city coordinates from
//! the backend. Every operation resolves to usable data: failed requests and
//! forced mock mode both fall back to the built-in fixture set.

pub mod client;
pub mod fixtures;
pub mod resource;
pub mod wire;

pub use client::{GatewayMode, RemoteGateway};
pub use fixtures::DEFAULT_COORDINATE;
pub use resource::Resource;
pub use wire::{CoordinateEntry, CoordinatesResponse};
