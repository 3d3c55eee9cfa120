//! Geographic helpers
//!
//! Great-circle distance and coarse city classification for anchor points.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// City string used when an anchor falls outside every known box
pub const UNKNOWN_CITY: &str = "City, State";

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to another point in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Great-circle distance between two points given in degrees
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A named latitude/longitude range, bounds inclusive
#[derive(Debug, Clone, Copy)]
pub struct CityBox {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CityBox {
    pub fn contains(&self, point: &Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lon..=self.max_lon).contains(&point.longitude)
    }
}

/// Known cities, checked in order
pub const CITY_BOXES: [CityBox; 5] = [
    CityBox {
        name: "Hyderabad, Telangana",
        min_lat: 17.0,
        max_lat: 18.0,
        min_lon: 78.0,
        max_lon: 79.0,
    },
    CityBox {
        name: "Mumbai, Maharashtra",
        min_lat: 19.0,
        max_lat: 20.0,
        min_lon: 72.0,
        max_lon: 73.0,
    },
    CityBox {
        name: "Delhi",
        min_lat: 28.0,
        max_lat: 29.0,
        min_lon: 77.0,
        max_lon: 78.0,
    },
    CityBox {
        name: "Bangalore, Karnataka",
        min_lat: 12.0,
        max_lat: 13.0,
        min_lon: 77.0,
        max_lon: 78.0,
    },
    CityBox {
        name: "Chennai, Tamil Nadu",
        min_lat: 13.0,
        max_lat: 14.0,
        min_lon: 80.0,
        max_lon: 81.0,
    },
];

/// Resolve the city string for an anchor
///
/// A non-empty hint wins verbatim; otherwise the anchor is matched against
/// [`CITY_BOXES`], falling back to [`UNKNOWN_CITY`].
pub fn resolve_city(anchor: &Coordinates, hint: Option<&str>) -> String {
    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        return hint.to_string();
    }

    CITY_BOXES
        .iter()
        .find(|city| city.contains(anchor))
        .map(|city| city.name)
        .unwrap_or(UNKNOWN_CITY)
        .to_string()
}
