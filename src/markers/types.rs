//! Core marker type definitions.
//!
//! Defines [`Marker`] (a persisted spot annotation), [`LatLng`] (a coordinate
//! pair), and [`MapBounds`] (the square region around the campus base point
//! that accepts map clicks).

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Name given to a spot when the user leaves the name field blank.
pub const DEFAULT_NAME: &str = "Untitled";

/// Kilometres per degree of latitude, used to size [`MapBounds`].
const KM_PER_DEGREE: f64 = 111.0;

/// A user-placed geographic point with a name and description.
///
/// Field names match the wire shape persisted in the `campusMarkers` slot.
/// `id` is assigned once at creation and never changes; there is no edit
/// operation, only creation and full removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_marker_name")]
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

fn default_marker_name() -> String {
    DEFAULT_NAME.to_string()
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Square bound around a base coordinate. Clicks outside the bound are
/// pulled back inside rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl MapBounds {
    /// Build a bound extending `radius_km` in each direction from `center`.
    pub fn around(center: LatLng, radius_km: f64) -> Self {
        let radius_degrees = radius_km / KM_PER_DEGREE;
        Self {
            south_west: LatLng::new(center.lat - radius_degrees, center.lng - radius_degrees),
            north_east: LatLng::new(center.lat + radius_degrees, center.lng + radius_degrees),
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Clamp a point into the bound, component-wise.
    pub fn clamp(&self, point: LatLng) -> LatLng {
        LatLng::new(
            point.lat.clamp(self.south_west.lat, self.north_east.lat),
            point.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }
}
