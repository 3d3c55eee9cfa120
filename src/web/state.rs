//! Application state shared across handlers

use crate::cache::PopulationCache;
use crate::config::Settings;
use crate::generator::SyntheticGenerator;
use crate::search::DoctorSearch;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Doctor search engine
    pub search: Arc<DoctorSearch>,
}

impl AppState {
    /// Create application state from settings
    pub fn new(settings: Settings) -> Self {
        let generator = match settings.search.rng_seed {
            Some(seed) => {
                info!("Using fixed generator seed {}", seed);
                SyntheticGenerator::seeded(seed)
            }
            None => SyntheticGenerator::new(),
        }
        .with_population_size(settings.search.population_size);

        let cache = PopulationCache::new(settings.search.cache_ttl);
        let search = DoctorSearch::new(Arc::new(generator), cache);

        Self::with_search(settings, search)
    }

    /// Create application state around an existing search engine
    pub fn with_search(settings: Settings, search: DoctorSearch) -> Self {
        Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
