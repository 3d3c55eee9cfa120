//! Search execution: cache lookup, generation, filtering and ranking

use super::models::{DoctorQuery, SearchError};
use crate::cache::{CacheStatus, PopulationCache};
use crate::doctors::{DoctorRecord, SearchResult};
use crate::generator::CandidateSource;
use crate::geo::{round_to, Coordinates};
use crate::metrics::Metrics;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Doctor search engine over a cached, generated population
pub struct DoctorSearch {
    /// Where populations come from on a cache miss
    source: Arc<dyn CandidateSource>,
    /// Populations by query signature
    cache: PopulationCache,
    metrics: Metrics,
}

impl DoctorSearch {
    /// Create a new search engine
    pub fn new(source: Arc<dyn CandidateSource>, cache: PopulationCache) -> Self {
        Self {
            source,
            cache,
            metrics: Metrics::new(),
        }
    }

    pub fn cache(&self) -> &PopulationCache {
        &self.cache
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run a query and return matches nearest first
    ///
    /// A generation failure is logged and yields an empty list.
    pub fn search(&self, query: &DoctorQuery) -> Vec<SearchResult> {
        self.metrics.inc_search();
        let signature = query.signature();

        let population = self.cache.get_or_generate(&signature, || {
            info!(
                "Generating doctors for ({}, {}) via {}, city: {:?}",
                query.anchor.latitude,
                query.anchor.longitude,
                self.source.name(),
                query.city_hint
            );
            self.source.generate(&query.generation_request())
        });

        let doctors = match population {
            Ok((doctors, status)) => {
                match status {
                    CacheStatus::Hit => {
                        debug!("Using cached doctors for {}", signature);
                        self.metrics.record_cache_hit();
                    }
                    CacheStatus::Miss => self.metrics.record_cache_miss(),
                    CacheStatus::Expired => {
                        debug!("Cached doctors for {} expired", signature);
                        self.metrics.record_cache_expired();
                    }
                }
                doctors
            }
            Err(e) => {
                warn!("Doctor generation failed for {}: {}", signature, e);
                self.metrics.record_generation_failure();
                return Vec::new();
            }
        };

        rank(&doctors, query)
    }

    /// Find a doctor returned by any earlier search
    pub fn find_by_id(&self, id: &str) -> Result<DoctorRecord, SearchError> {
        let found = self.cache.find(id);
        self.metrics.record_lookup(found.is_some());

        found.ok_or_else(|| {
            debug!("Doctor {} not found in {} cache entries", id, self.cache.len());
            SearchError::NotFound(id.to_string())
        })
    }
}

/// Filter a population against a query and sort it by distance
///
/// The distance bound is checked on the exact distance; results carry it
/// rounded to one decimal. The sort is stable, so ties keep population order.
pub fn rank(doctors: &[DoctorRecord], query: &DoctorQuery) -> Vec<SearchResult> {
    let term = query.search_term.to_lowercase();

    let mut results: Vec<SearchResult> = doctors
        .iter()
        .filter_map(|doctor| {
            let location = Coordinates::new(doctor.latitude, doctor.longitude);
            let distance = query.anchor.distance_to(&location);

            if distance > query.max_distance_km {
                return None;
            }
            if !query.specialty.is_empty() && !doctor.has_specialty(&query.specialty) {
                return None;
            }
            if query.min_rating > 0.0 && doctor.rating < query.min_rating {
                return None;
            }
            if !term.is_empty() && !doctor.matches_term(&term) {
                return None;
            }

            Some(SearchResult::new(doctor.clone(), round_to(distance, 1)))
        })
        .collect();

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results
}
