// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Endpoint addressing.

use std::fmt;

use reqwest::Url;
use tripmate_core::TripmateError;

/// A remote resource the gateway knows how to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Countries,
    Cities {
        country: String,
    },
    Tours {
        country: Option<String>,
        city: Option<String>,
    },
    Attractions {
        country: Option<String>,
        city: Option<String>,
    },
    Coordinates {
        city: String,
    },
}

impl Resource {
    /// Absolute URL of this resource under `base`.
    ///
    /// Path parameters are percent-encoded as single segments, so a city
    /// named `"New York"` or `"a/b"` never changes the path shape.
    pub fn url(&self, base: &Url) -> Result<Url, TripmateError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TripmateError::Config(format!("base URL `{base}` cannot carry a path"))
            })?;
            segments.pop_if_empty();
            match self {
                Resource::Countries => {
                    segments.push("countryList");
                }
                Resource::Cities { country } => {
                    segments.push("cityList").push(country);
                }
                Resource::Tours { .. } => {
                    segments.push("tours");
                }
                Resource::Attractions { .. } => {
                    segments.push("attractions");
                }
                Resource::Coordinates { city } => {
                    segments.push("coordinates").push(city);
                }
            }
        }

        if let Resource::Tours { country, city } | Resource::Attractions { country, city } = self {
            let params: Vec<(&str, &str)> = [("country", country), ("city", city)]
                .into_iter()
                .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
                .collect();
            if !params.is_empty() {
                url.query_pairs_mut().extend_pairs(params);
            }
        }

        Ok(url)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Countries => f.write_str("countries"),
            Resource::Cities { country } => write!(f, "cities({country})"),
            Resource::Tours { .. } => f.write_str("tours"),
            Resource::Attractions { .. } => f.write_str("attractions"),
            Resource::Coordinates { city } => write!(f, "coordinates({city})"),
        }
    }
}
