//! Doctor query and related data models

use crate::cache::QuerySignature;
use crate::generator::GenerationRequest;
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default search radius in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// Errors surfaced by the doctor search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Doctor not found")]
    NotFound(String),
}

/// A complete doctor search with all filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorQuery {
    /// Search origin
    pub anchor: Coordinates,
    /// Specialty filter, empty for any
    pub specialty: String,
    /// Maximum distance from the anchor in kilometers
    pub max_distance_km: f64,
    /// Minimum rating, 0 disables the filter
    pub min_rating: f64,
    /// Free-text filter over name, specialty, hospital, address and bio
    pub search_term: String,
    /// City string for generated addresses, empty to classify the anchor
    pub city_hint: String,
}

impl DoctorQuery {
    /// Create a query around an anchor with default filters
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            anchor: Coordinates::new(latitude, longitude),
            specialty: String::new(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            min_rating: 0.0,
            search_term: String::new(),
            city_hint: String::new(),
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn with_max_distance(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city_hint = city.into();
        self
    }

    /// Cache key for the population this query draws from
    pub fn signature(&self) -> QuerySignature {
        QuerySignature::new(
            self.anchor.latitude,
            self.anchor.longitude,
            &self.specialty,
            self.max_distance_km,
            &self.city_hint,
        )
    }

    /// Parameters handed to the candidate source on a cache miss
    pub fn generation_request(&self) -> GenerationRequest<'_> {
        GenerationRequest::new(self.anchor)
            .specialty(&self.specialty)
            .city_hint(&self.city_hint)
    }
}
